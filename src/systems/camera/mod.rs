use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{AircraftState, CameraComponent, PlayerController};

/// Ease the chase camera toward its ideal spot behind the player aircraft and
/// aim it at the aircraft.
pub fn camera_follow_system(
    mut camera_query: Query<(&mut CameraComponent, &mut Transform), Without<PlayerController>>,
    target_query: Query<&AircraftState, With<PlayerController>>,
) {
    if let (Ok((mut camera, mut camera_transform)), Ok(state)) =
        (camera_query.get_single_mut(), target_query.get_single())
    {
        let spatial = &state.spatial;
        camera.follow(&spatial.position, spatial.attitude.yaw);

        let eye = to_render(&camera.position);
        let target = to_render(&camera.target);
        *camera_transform = Transform::from_translation(eye).looking_at(target, Vec3::Y);
    }
}

/// Simulation uses f64 nalgebra vectors, bevy transforms are f32
pub fn to_render(v: &Vector3<f64>) -> Vec3 {
    Vec3::new(v.x as f32, v.y as f32, v.z as f32)
}
