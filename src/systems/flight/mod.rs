mod reset;
mod step;

pub use reset::{reset_aircraft, reset_aircraft_system, ResetRequestEvent};
pub use step::{lift_factor, step_flight, FlightReport, FlightStatus};

use bevy::prelude::*;

use crate::components::{AircraftState, FlightConfig, InputState, PlayerController};
use crate::resources::{PhysicsConfig, TerrainState};

/// Report from the most recent flight step, read by the HUD.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct FlightTelemetry {
    pub last: Option<FlightReport>,
    pub steps: u64,
}

/// Run one flight step for the player aircraft.
///
/// The step always advances by `PhysicsConfig::timestep`, not by the
/// measured frame time.
pub fn flight_update_system(
    mut query: Query<&mut AircraftState, With<PlayerController>>,
    input: Res<InputState>,
    config: Res<FlightConfig>,
    physics: Res<PhysicsConfig>,
    terrain: Res<TerrainState>,
    mut telemetry: ResMut<FlightTelemetry>,
) {
    let Ok(mut state) = query.get_single_mut() else {
        return;
    };

    let previous_mode = state.flight_mode(config.ground_threshold);
    let report = step_flight(
        &mut state,
        &input,
        &config,
        &terrain.regions,
        physics.timestep,
    );

    let mode = state.flight_mode(config.ground_threshold);
    if mode != previous_mode {
        info!(
            "{:?} -> {:?} at {:.1} kts",
            previous_mode, mode, state.speed
        );
    }
    if report.stalled && !telemetry.last.map_or(false, |last| last.stalled) {
        warn!("Stall at {} kts", report.speed_kts);
    }

    telemetry.last = Some(report);
    telemetry.steps += 1;
}

/// Drop the toggle edges once every consumer of this frame has run
pub fn clear_input_edges_system(mut input: ResMut<InputState>) {
    input.clear_edges();
}
