pub mod config;
pub mod controls;
pub mod state;

pub use config::{FlightConfig, StartConfig};
pub use controls::{Control, InputState};
pub use state::{AircraftState, FlightMode};
