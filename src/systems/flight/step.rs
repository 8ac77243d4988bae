use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::components::{AircraftState, Control, FlightConfig, FlightMode, InputState, Region};
use crate::systems::collisions::ground_height;

/// Lift available at `speed`: none up to the stall speed, ramping linearly to
/// full lift at the take-off speed.
pub fn lift_factor(speed: f64, config: &FlightConfig) -> f64 {
    if speed > config.takeoff_speed {
        1.0
    } else if speed > config.stall_speed {
        (speed - config.stall_speed) / (config.takeoff_speed - config.stall_speed)
    } else {
        0.0
    }
}

/// Status line shown on the HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightStatus {
    /// Throttle position in whole percent, rounded down.
    Throttle(u32),
    EngineOff,
    Stall,
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlightStatus::Throttle(percent) => write!(f, "Throttle: {}%", percent),
            FlightStatus::EngineOff => write!(f, "Engine OFF"),
            FlightStatus::Stall => write!(f, "STALL!"),
        }
    }
}

/// What one flight step observed, for the HUD and for tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightReport {
    /// Mode the step ran in, taken before translation.
    pub mode: FlightMode,
    pub lift_factor: f64,
    pub stalled: bool,
    /// Ground elevation under the aircraft after translation.
    pub ground_height: f64,
    pub status: FlightStatus,
    /// Speed in whole knots, rounded down.
    pub speed_kts: u32,
}

impl FlightReport {
    pub fn speed_readout(&self) -> String {
        format!("{} kts", self.speed_kts)
    }
}

/// Advance the aircraft by one fixed step of `dt` seconds.
///
/// Never fails: every input state and position yields a new state with
/// `speed >= 0` and `throttle` in [0, 1].
pub fn step_flight(
    state: &mut AircraftState,
    input: &InputState,
    config: &FlightConfig,
    regions: &[Region],
    dt: f64,
) -> FlightReport {
    if input.just_pressed(Control::EngineToggle) {
        state.engine_on = !state.engine_on;
        info!(
            "Engine {}",
            if state.engine_on { "started" } else { "shut down" }
        );
    }

    update_throttle(state, input, config, dt);

    // Speed
    let accel = if state.engine_on {
        state.throttle * config.engine_power
    } else {
        0.0
    };
    let drag = state.speed * config.drag_coefficient();
    state.speed = (state.speed + (accel - drag) * dt).max(0.0);

    let lift = lift_factor(state.speed, config);

    let mut attitude = state.spatial.attitude;
    if input.held(Control::PitchUp) {
        attitude.pitch -= config.pitch_rate * dt;
    }
    if input.held(Control::PitchDown) {
        attitude.pitch += config.pitch_rate * dt;
    }

    let mode = state.flight_mode(config.ground_threshold);
    match mode {
        FlightMode::Grounded => {
            // Nose wheel steering
            if input.held(Control::RollLeft) {
                attitude.yaw += config.yaw_rate * dt;
            }
            if input.held(Control::RollRight) {
                attitude.yaw -= config.yaw_rate * dt;
            }
            attitude.roll *= config.ground_damping;
            attitude.pitch *= config.ground_damping;
        }
        FlightMode::Airborne => {
            if input.held(Control::RollLeft) {
                attitude.roll += config.roll_rate * dt;
            }
            if input.held(Control::RollRight) {
                attitude.roll -= config.roll_rate * dt;
            }
            attitude.yaw += attitude.roll * dt * config.bank_turn_coupling;
            if input.roll_idle() {
                attitude.roll *= config.roll_decay;
            }
        }
    }

    let velocity = attitude.rotate(&Vector3::new(0.0, 0.0, -state.speed));
    let mut position = state.spatial.position + velocity * dt;

    let mut stalled = false;
    if mode == FlightMode::Airborne {
        position.y -= config.gravity * dt;

        if lift > 0.0 {
            position.y += config.gravity * dt * lift;
            let climb = -attitude.pitch;
            if climb > 0.0 {
                position.y += climb * state.speed * dt * config.climb_gain * lift;
            } else {
                // Nose-down sink is not scaled by lift
                position.y += climb * state.speed * dt * config.climb_gain;
            }
        } else {
            attitude.pitch += config.stall_pitch_rate * dt;
            stalled = state.speed < config.stall_speed;
        }
    }

    let ground = ground_height(regions, position.x, position.z, config.ocean_floor);
    if position.y < ground + config.ground_clearance {
        position.y = ground + config.ground_clearance;
    }

    state.spatial.position = position;
    state.spatial.velocity = velocity;
    state.spatial.attitude = attitude;

    if state.engine_on {
        state.prop_angle += state.speed * dt * config.prop_spin_gain + state.throttle;
    }

    let status = if stalled {
        FlightStatus::Stall
    } else if !state.engine_on {
        FlightStatus::EngineOff
    } else {
        FlightStatus::Throttle((state.throttle * 100.0).floor() as u32)
    };

    FlightReport {
        mode,
        lift_factor: lift,
        stalled,
        ground_height: ground,
        status,
        speed_kts: state.speed.floor() as u32,
    }
}

fn update_throttle(
    state: &mut AircraftState,
    input: &InputState,
    config: &FlightConfig,
    dt: f64,
) {
    let mut throttle = state.throttle;
    if input.held(Control::ThrottleUp) {
        throttle += config.throttle_rate * dt;
    }
    if input.held(Control::ThrottleDown) {
        throttle -= 2.0 * config.throttle_rate * dt;
    }
    if !state.engine_on {
        throttle -= config.throttle_rate * dt;
    }
    state.throttle = throttle.clamp(0.0, 1.0);
}
