mod aircraft;
mod camera;
mod hud;
mod staging;
mod terrain;

pub use aircraft::AircraftPlugin;
pub use camera::CameraPlugin;
pub use hud::HudPlugin;
pub use staging::{FlightSet, StartupStage, StartupSequencePlugin};
pub use terrain::{build_terrain, TerrainPlugin};

use bevy::app::PluginGroupBuilder;
use bevy::prelude::*;

use crate::resources::SimulationConfig;

/// Everything the game needs on top of Bevy's own plugins
pub struct IslandhopPlugins {
    config: SimulationConfig,
}

impl IslandhopPlugins {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }
}

impl Default for IslandhopPlugins {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

impl PluginGroup for IslandhopPlugins {
    fn build(self) -> PluginGroupBuilder {
        let config = self.config;
        PluginGroupBuilder::start::<Self>()
            .add(StartupSequencePlugin)
            .add(TerrainPlugin::new(config.world))
            .add(AircraftPlugin::new(config.flight, config.start, config.physics))
            .add(CameraPlugin::new(config.camera))
            .add(HudPlugin::new(config.map))
    }
}
