pub mod config;
mod hud;
mod terrain;

pub use config::{
    CameraConfig, MapConfig, PhysicsConfig, RegionLayout, SimulationConfig, WorldConfig,
};
pub use hud::{HudReadout, MapCanvases, MapOverlay};
pub use terrain::TerrainState;
