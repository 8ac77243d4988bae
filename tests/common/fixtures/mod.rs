mod components;
mod terrain;

// Re-export test fixtures
pub use components::*;
pub use physics::*;
pub use terrain::*;
