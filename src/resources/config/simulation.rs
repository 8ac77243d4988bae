use super::{camera::CameraConfig, physics::PhysicsConfig, render::MapConfig, world::WorldConfig};
use crate::components::{FlightConfig, StartConfig};
use crate::utils::SimError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub flight: FlightConfig,
    pub start: StartConfig,
    pub world: WorldConfig,
    pub camera: CameraConfig,
    pub map: MapConfig,
}

impl SimulationConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SimError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    /// `<config dir>/islandhop/config.yaml`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("islandhop").join("config.yaml"))
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if self.physics.timestep <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "physics.timestep must be positive, got {}",
                self.physics.timestep
            )));
        }
        if self.physics.frame_rate_hz <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "physics.frame_rate_hz must be positive, got {}",
                self.physics.frame_rate_hz
            )));
        }
        self.flight.validate().map_err(SimError::InvalidConfig)?;
        self.world.validate().map_err(SimError::InvalidConfig)?;
        if self.map.minimap_size == 0 || self.map.full_map_size == 0 {
            return Err(SimError::InvalidConfig(
                "map canvases must be at least one pixel".to_string(),
            ));
        }
        Ok(())
    }
}
