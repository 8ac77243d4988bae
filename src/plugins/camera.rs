use bevy::prelude::*;

use crate::components::CameraComponent;
use crate::plugins::{FlightSet, StartupStage};
use crate::resources::CameraConfig;
use crate::systems::camera::to_render;
use crate::systems::camera_follow_system;

pub struct CameraPlugin {
    config: CameraConfig,
}

impl CameraPlugin {
    pub fn new(config: CameraConfig) -> Self {
        Self { config }
    }
}

impl Default for CameraPlugin {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        // Headless apps track the chase pose without a render camera
        let with_render_camera = app.is_plugin_added::<bevy::render::RenderPlugin>();
        let config = self.config.clone();

        app.insert_resource(self.config.clone())
            .add_systems(
                Startup,
                (move |commands: Commands| spawn_camera(commands, &config, with_render_camera))
                    .in_set(StartupStage::BuildCameras),
            )
            .add_systems(FixedUpdate, camera_follow_system.in_set(FlightSet::Sync));
    }
}

fn spawn_camera(mut commands: Commands, config: &CameraConfig, with_render_camera: bool) {
    let camera = CameraComponent::new(config.offset, config.fov)
        .with_offset(config.offset)
        .with_smoothing(config.smoothing_factor);
    let transform = Transform::from_translation(to_render(&camera.position));

    let mut entity = commands.spawn((camera, transform, Name::new("Chase Camera")));
    if with_render_camera {
        entity.insert((
            Camera3d::default(),
            Projection::Perspective(PerspectiveProjection {
                fov: config.fov.to_radians(),
                near: 0.1,
                far: 10000.0,
                ..default()
            }),
        ));
    } else {
        warn!("No render plugin, chase camera runs without a view");
    }
}
