use bevy::prelude::*;

use crate::components::{AircraftState, PlayerController, StartConfig};

/// Ask for the player aircraft to be put back at the start pose
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ResetRequestEvent;

/// Put the aircraft back on the runway: start position and heading, level,
/// stopped, throttle closed, engine running.
pub fn reset_aircraft(state: &mut AircraftState, start: &StartConfig) {
    state.reset(start);
}

pub fn reset_aircraft_system(
    mut events: EventReader<ResetRequestEvent>,
    mut query: Query<&mut AircraftState, With<PlayerController>>,
    start: Res<StartConfig>,
) {
    // Several requests in one frame collapse into one reset
    if events.read().count() == 0 {
        return;
    }
    for mut state in query.iter_mut() {
        reset_aircraft(&mut state, &start);
    }
}
