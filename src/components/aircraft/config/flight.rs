use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{GRAVITY, OCEAN_ELEVATION};

/// Tuning of the arcade flight model.
///
/// Rates are per second of simulated time and are multiplied by the physics
/// timestep on every frame.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    /// Throttle gain per second while throttle up is held. Throttle down
    /// removes twice this, a dead engine bleeds it off at this rate.
    pub throttle_rate: f64,
    /// Acceleration at full throttle (m/s^2).
    pub engine_power: f64,
    /// Speed at which drag balances full power; sets the linear drag coefficient.
    pub max_speed: f64,
    pub stall_speed: f64,
    pub takeoff_speed: f64,
    pub pitch_rate: f64,
    pub roll_rate: f64,
    /// Taxi steering rate while grounded.
    pub yaw_rate: f64,
    /// Heading change per radian of bank.
    pub bank_turn_coupling: f64,
    /// Per-frame multiplier levelling roll and pitch on the wheels.
    pub ground_damping: f64,
    /// Per-frame multiplier on roll in the air with no roll input.
    pub roll_decay: f64,
    pub gravity: f64,
    /// Vertical gain of the pitch-coupled climb/descent term.
    pub climb_gain: f64,
    /// Nose rotation rate forced while stalled.
    pub stall_pitch_rate: f64,
    /// Altitude below which the aircraft counts as grounded.
    pub ground_threshold: f64,
    /// Height kept above the terrain by the collision clamp.
    pub ground_clearance: f64,
    /// Ground height used when no region is near (the ocean plane).
    pub ocean_floor: f64,
    pub prop_spin_gain: f64,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            throttle_rate: 0.1,
            engine_power: 40.0,
            max_speed: 150.0,
            stall_speed: 50.0,
            takeoff_speed: 60.0,
            pitch_rate: 1.5,
            roll_rate: 2.0,
            yaw_rate: 1.0,
            bank_turn_coupling: 0.8,
            ground_damping: 0.9,
            roll_decay: 0.98,
            gravity: GRAVITY,
            climb_gain: 0.5,
            stall_pitch_rate: 1.0,
            ground_threshold: -3.0,
            ground_clearance: 0.5,
            ocean_floor: OCEAN_ELEVATION,
            prop_spin_gain: 5.0,
        }
    }
}

impl FlightConfig {
    /// Linear drag coefficient, chosen so full power balances at `max_speed`
    pub fn drag_coefficient(&self) -> f64 {
        self.engine_power / self.max_speed
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.max_speed <= 0.0 {
            return Err(format!("max_speed must be positive, got {}", self.max_speed));
        }
        if self.takeoff_speed <= self.stall_speed {
            return Err(format!(
                "takeoff_speed ({}) must exceed stall_speed ({})",
                self.takeoff_speed, self.stall_speed
            ));
        }
        if self.throttle_rate < 0.0 {
            return Err(format!(
                "throttle_rate must not be negative, got {}",
                self.throttle_rate
            ));
        }
        Ok(())
    }
}
