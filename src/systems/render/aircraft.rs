use bevy::prelude::*;

use crate::components::{AircraftState, Attitude, PlayerController};
use crate::systems::camera::to_render;

/// Render rotation for an attitude, same yaw-pitch-roll order as the
/// simulation
pub fn attitude_to_quat(attitude: &Attitude) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        attitude.yaw as f32,
        attitude.pitch as f32,
        attitude.roll as f32,
    )
}

/// Copy the simulated pose onto the aircraft's render transform
pub fn aircraft_render_system(
    mut query: Query<(&AircraftState, &mut Transform), With<PlayerController>>,
) {
    for (state, mut transform) in query.iter_mut() {
        transform.translation = to_render(&state.spatial.position);
        transform.rotation = attitude_to_quat(&state.spatial.attitude);
    }
}
