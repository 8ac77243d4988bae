use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{FIXED_TIMESTEP, FRAME_RATE_HZ};

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Step fed to the flight model every frame, whatever the measured
    /// frame time [s]
    pub timestep: f64,
    /// Rate the fixed frame schedule runs at [Hz]
    pub frame_rate_hz: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            timestep: FIXED_TIMESTEP,
            frame_rate_hz: FRAME_RATE_HZ,
        }
    }
}
