use islandhop::components::StartConfig;
use nalgebra::Vector3;
use std::f64::consts::PI;

/// Parked just below the ground threshold at the north end of the airport,
/// facing south with the whole disc ahead
pub fn create_test_runway_start() -> StartConfig {
    StartConfig {
        position: Vector3::new(0.0, -3.1, -280.0),
        heading: PI,
    }
}

/// High over open water, far from every island
pub fn create_test_high_start() -> StartConfig {
    StartConfig {
        position: Vector3::new(9000.0, 800.0, 9000.0),
        heading: 0.0,
    }
}
