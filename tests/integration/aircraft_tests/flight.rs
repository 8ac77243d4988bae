use islandhop::{
    components::{AircraftState, Control, FlightMode},
    systems::{FlightStatus, FlightTelemetry},
};

use crate::common::{
    aircraft_state, assert_aircraft_state_valid, create_test_high_start,
    create_test_runway_start, last_lift, wait_for_condition, TestAppBuilder,
};

#[test]
fn test_takeoff_and_climb() {
    let mut app = TestAppBuilder::new()
        .with_start(create_test_runway_start())
        .build();

    app.press(Control::ThrottleUp);
    let lifting = wait_for_condition(&mut app, |app| last_lift(app) >= 1.0, 900);
    assert!(lifting, "never reached take-off speed");

    let on_runway = aircraft_state(&mut app);
    assert!(on_runway.speed > 60.0);
    assert_eq!(on_runway.flight_mode(-3.0), FlightMode::Grounded);
    // Still on the airport apron
    assert!(on_runway.spatial.position.z < 300.0);

    // Rotate
    if let Some(mut state) = app.query_single_mut::<AircraftState>() {
        state.spatial.attitude.pitch = 0.2;
    }
    app.run_steps(30);

    let climbing = aircraft_state(&mut app);
    assert_aircraft_state_valid(&climbing);
    assert_eq!(climbing.flight_mode(-3.0), FlightMode::Airborne);
    assert!(climbing.spatial.position.y > on_runway.spatial.position.y + 1.0);
}

#[test]
fn test_stall_over_open_water() {
    let mut app = TestAppBuilder::new()
        .with_start(create_test_high_start())
        .build();

    app.run_frame();

    let telemetry = app.get_state::<FlightTelemetry>().expect("telemetry");
    let report = telemetry.last.expect("one step reported");
    assert!(report.stalled);
    assert_eq!(report.status, FlightStatus::Stall);
    assert_eq!(report.ground_height, -10.0);

    let state = aircraft_state(&mut app);
    assert!(state.spatial.attitude.pitch > 0.0);
    assert!(state.spatial.position.y < 800.0);
}

#[test]
fn test_long_fall_lands_on_the_ocean_plane() {
    let mut app = TestAppBuilder::new()
        .with_start(create_test_high_start())
        .build();

    app.run_steps(6000);
    let state = aircraft_state(&mut app);
    assert_aircraft_state_valid(&state);
    assert!(state.spatial.position.y >= -9.5 - 1e-9);
}

#[test]
fn test_telemetry_counts_steps() {
    let mut app = TestAppBuilder::new().build();
    app.run_steps(25);
    let telemetry = app.get_state::<FlightTelemetry>().expect("telemetry");
    assert_eq!(telemetry.steps, 25);
}
