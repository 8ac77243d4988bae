use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Where the aircraft is parked at startup and after a reset.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartConfig {
    /// World position (m), on the Fields runway by default.
    pub position: Vector3<f64>,
    /// Initial yaw (radians). PI faces south along the runway.
    pub heading: f64,
}

impl Default for StartConfig {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, -3.0, 150.0),
            heading: PI,
        }
    }
}
