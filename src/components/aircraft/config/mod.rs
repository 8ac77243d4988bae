mod flight;
mod start;

pub use flight::FlightConfig;
pub use start::StartConfig;
