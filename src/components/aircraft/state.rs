use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::{Attitude, SpatialComponent, StartConfig};

/// Flight mode derived from altitude every frame. Never stored on the aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightMode {
    Airborne,
    Grounded,
}

impl FlightMode {
    /// Grounded when the altitude sits below the ground threshold
    pub fn from_altitude(altitude: f64, ground_threshold: f64) -> Self {
        if altitude < ground_threshold {
            FlightMode::Grounded
        } else {
            FlightMode::Airborne
        }
    }

    pub fn is_grounded(&self) -> bool {
        matches!(self, FlightMode::Grounded)
    }
}

/// Represents the state of the player aircraft.
#[derive(Component, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AircraftState {
    /// Position, attitude and the last applied velocity.
    pub spatial: SpatialComponent,
    /// Forward speed along the body axis, never negative.
    pub speed: f64,
    /// Power lever position in [0, 1].
    pub throttle: f64,
    pub engine_on: bool,
    /// Accumulated propeller rotation (radians), for the renderer.
    pub prop_angle: f64,
}

impl Default for AircraftState {
    fn default() -> Self {
        Self::from_start(&StartConfig::default())
    }
}

impl AircraftState {
    /// Parked at the start position with the engine running and throttle closed
    pub fn from_start(start: &StartConfig) -> Self {
        Self {
            spatial: SpatialComponent::new(start.position, Attitude::from_yaw(start.heading)),
            speed: 0.0,
            throttle: 0.0,
            engine_on: true,
            prop_angle: 0.0,
        }
    }

    pub fn reset(&mut self, start: &StartConfig) {
        info!("Resetting aircraft to {:?}", start.position);
        *self = Self::from_start(start);
    }

    pub fn flight_mode(&self, ground_threshold: f64) -> FlightMode {
        FlightMode::from_altitude(self.spatial.position.y, ground_threshold)
    }
}
