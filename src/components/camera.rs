use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::utils::lerp;

/// Chase camera trailing the player aircraft
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct CameraComponent {
    pub position: Vector3<f64>,
    /// Point the camera looks at, the aircraft position after the last follow
    pub target: Vector3<f64>,
    pub fov: f32,
    pub znear: f32,
    pub zfar: f32,
    /// Offset behind and above the aircraft, rotated by its yaw only
    pub offset: Vector3<f64>,
    /// Fraction of the remaining distance closed each frame
    pub smoothing_factor: f64,
}

impl Default for CameraComponent {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 10.0, 30.0),
            target: Vector3::zeros(),
            fov: 60.0,
            znear: 0.1,
            zfar: 10000.0,
            offset: Vector3::new(0.0, 10.0, 30.0),
            smoothing_factor: 0.1,
        }
    }
}

impl CameraComponent {
    pub fn new(position: Vector3<f64>, fov: f32) -> Self {
        Self {
            position,
            fov,
            ..Default::default()
        }
    }

    pub fn with_offset(mut self, offset: Vector3<f64>) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_smoothing(mut self, smoothing_factor: f64) -> Self {
        self.smoothing_factor = smoothing_factor;
        self
    }

    /// Where the camera wants to be for an aircraft at `target` heading `yaw`
    pub fn ideal_position(&self, target: &Vector3<f64>, yaw: f64) -> Vector3<f64> {
        target + UnitQuaternion::from_axis_angle(&Vector3::y_axis(), yaw) * self.offset
    }

    /// Ease toward the ideal chase position and look at the target
    pub fn follow(&mut self, target: &Vector3<f64>, yaw: f64) {
        let ideal = self.ideal_position(target, yaw);
        let t = self.smoothing_factor;
        self.position = Vector3::new(
            lerp(self.position.x, ideal.x, t),
            lerp(self.position.y, ideal.y, t),
            lerp(self.position.z, ideal.z, t),
        );
        self.target = *target;
    }
}
