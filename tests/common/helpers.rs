use crate::common::TestApp;
use bevy::prelude::*;
use islandhop::{
    components::{AircraftState, Control},
    systems::FlightTelemetry,
};

/// Waits for a specific condition to be met within a maximum number of steps
pub fn wait_for_condition<F>(test_app: &mut TestApp, condition: F, max_steps: usize) -> bool
where
    F: Fn(&mut App) -> bool,
{
    for _ in 0..max_steps {
        if condition(&mut test_app.app) {
            return true;
        }
        test_app.run_frame();
    }
    false
}

/// Helper to run a simulation for a specific duration
pub fn simulate_duration(test_app: &mut TestApp, duration: f64, timestep: f64) {
    let steps = (duration / timestep).ceil() as usize;
    test_app.run_steps(steps);
}

/// Hold a control for `steps` frames, then let go
pub fn hold_for(test_app: &mut TestApp, control: Control, steps: usize) {
    test_app.press(control);
    test_app.run_steps(steps);
    test_app.release(control);
}

pub fn aircraft_state(test_app: &mut TestApp) -> AircraftState {
    *test_app
        .query_single::<AircraftState>()
        .expect("Aircraft state not found")
}

/// Lift factor reported by the most recent flight step
pub fn last_lift(app: &mut App) -> f64 {
    app.world()
        .get_resource::<FlightTelemetry>()
        .and_then(|t| t.last)
        .map_or(0.0, |report| report.lift_factor)
}
