pub mod camera;
pub mod physics;
pub mod render;
pub mod simulation;
pub mod world;

pub use camera::CameraConfig;
pub use physics::PhysicsConfig;
pub use render::MapConfig;
pub use simulation::SimulationConfig;
pub use world::{RegionLayout, WorldConfig};
