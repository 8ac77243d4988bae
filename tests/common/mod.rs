mod assertions;
mod fixtures;
mod helpers;
mod test_app;

// Re-export
pub use assertions::{
    assert_aircraft_state_valid, assert_attitude_eq, assert_position_eq, assert_rgb_eq,
};

pub use helpers::*;

pub use fixtures::*;
pub use test_app::{TestApp, TestAppBuilder};
