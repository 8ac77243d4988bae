pub mod aircraft;
pub mod camera;
mod controller;
pub mod spatial;
pub mod terrain;

pub use aircraft::{
    AircraftState, Control, FlightConfig, FlightMode, InputState, StartConfig,
};
pub use camera::CameraComponent;
pub use controller::PlayerController;
pub use spatial::{Attitude, SpatialComponent};
pub use terrain::{BiomeKind, FeatureType, Region, TerrainFeatureComponent, TreeVariant};
