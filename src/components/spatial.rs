use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Euler attitude of a body, in radians.
///
/// Angles are always composed in the same order: yaw about +Y, then pitch
/// about +X, then roll about +Z (`R = Ry(yaw) * Rx(pitch) * Rz(roll)`).
/// Updates build a new `Attitude`; no rotation object is shared between
/// computations.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Attitude {
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
}

impl Attitude {
    pub fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self { pitch, yaw, roll }
    }

    pub fn from_yaw(yaw: f64) -> Self {
        Self {
            yaw,
            ..Default::default()
        }
    }

    pub fn with_pitch(self, pitch: f64) -> Self {
        Self { pitch, ..self }
    }

    pub fn with_yaw(self, yaw: f64) -> Self {
        Self { yaw, ..self }
    }

    pub fn with_roll(self, roll: f64) -> Self {
        Self { roll, ..self }
    }

    /// Rotation from body to world frame in yaw-pitch-roll order
    pub fn to_quaternion(&self) -> UnitQuaternion<f64> {
        UnitQuaternion::from_axis_angle(&Vector3::y_axis(), self.yaw)
            * UnitQuaternion::from_axis_angle(&Vector3::x_axis(), self.pitch)
            * UnitQuaternion::from_axis_angle(&Vector3::z_axis(), self.roll)
    }

    /// Rotate a body-frame vector into the world frame
    pub fn rotate(&self, body: &Vector3<f64>) -> Vector3<f64> {
        self.to_quaternion() * body
    }
}

/// Spatial state of a simulated body
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpatialComponent {
    /// Position in world space, y up [m]
    pub position: Vector3<f64>,

    /// Velocity applied during the last step [m/s]
    pub velocity: Vector3<f64>,

    pub attitude: Attitude,
}

impl Default for SpatialComponent {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            attitude: Attitude::default(),
        }
    }
}

impl SpatialComponent {
    pub fn new(position: Vector3<f64>, attitude: Attitude) -> Self {
        Self {
            position,
            velocity: Vector3::zeros(),
            attitude,
        }
    }

    /// Create a new spatial component at a specific position
    pub fn at_position(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }
}
