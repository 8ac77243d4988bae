use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub offset: Vector3<f64>,
    pub smoothing_factor: f64,
    pub fov: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            offset: Vector3::new(0.0, 10.0, 30.0),
            smoothing_factor: 0.1,
            fov: 60.0,
        }
    }
}
