use islandhop::{
    components::{AircraftState, Attitude, CameraComponent, Control, PlayerController},
    systems::ResetRequestEvent,
};
use nalgebra::Vector3;
use std::f64::consts::PI;

use crate::common::{
    aircraft_state, assert_aircraft_state_valid, assert_attitude_eq, assert_position_eq,
    create_test_physics_config, hold_for, TestAppBuilder,
};

#[test]
fn test_aircraft_spawns_at_start_pose() {
    let mut app = TestAppBuilder::new().build();

    let state = aircraft_state(&mut app);
    assert_position_eq(&state.spatial.position, &Vector3::new(0.0, -3.0, 150.0), 1e-12);
    assert_attitude_eq(&state.spatial.attitude, &Attitude::from_yaw(PI), 1e-12);
    assert_eq!(state.speed, 0.0);
    assert_eq!(state.throttle, 0.0);
    assert!(state.engine_on);

    let controller = app
        .query_single::<PlayerController>()
        .expect("player controller");
    assert!(!controller.keyboard_enabled);
}

#[test]
fn test_parked_aircraft_settles_on_runway() {
    let mut app = TestAppBuilder::new()
        .with_physics(create_test_physics_config())
        .build();

    // First frame sits exactly on the threshold and falls, then rests
    app.run_frame();
    let settled = aircraft_state(&mut app);
    assert!(settled.spatial.position.y < -3.0);
    assert!(settled.spatial.position.y >= -3.6);

    app.run_steps(60);
    let state = aircraft_state(&mut app);
    assert_aircraft_state_valid(&state);
    assert_eq!(state.spatial.position, settled.spatial.position);
    assert_eq!(state.speed, 0.0);
}

#[test]
fn test_throttle_up_accelerates() {
    let mut app = TestAppBuilder::new().build();

    hold_for(&mut app, Control::ThrottleUp, 120);
    let state = aircraft_state(&mut app);

    assert_aircraft_state_valid(&state);
    assert!(state.throttle > 0.15 && state.throttle < 0.25);
    assert!(state.speed > 0.0);
    // Heading south along the runway
    assert!(state.spatial.position.z > 150.0);
    assert!(state.spatial.position.x.abs() < 1e-6);
}

#[test]
fn test_engine_toggle_flips_once_per_press() {
    let mut app = TestAppBuilder::new().build();

    app.press(Control::EngineToggle);
    app.run_steps(10);
    assert!(!aircraft_state(&mut app).engine_on);

    app.release(Control::EngineToggle);
    app.run_frame();
    app.press(Control::EngineToggle);
    app.run_frame();
    assert!(aircraft_state(&mut app).engine_on);
}

#[test]
fn test_reset_event_restores_start() {
    let mut app = TestAppBuilder::new().build();

    hold_for(&mut app, Control::ThrottleUp, 300);
    let moved = aircraft_state(&mut app);
    assert!(moved.speed > 1.0);

    app.send_event(ResetRequestEvent);
    app.run_frame();

    // One step runs after the reset: parked, so only gravity acts
    let state = aircraft_state(&mut app);
    assert_eq!(state.speed, 0.0);
    assert_eq!(state.throttle, 0.0);
    assert!(state.engine_on);
    assert_eq!(state.spatial.position.x, 0.0);
    assert_eq!(state.spatial.position.z, 150.0);
    // Without lift the stall rotation still applies on that step
    assert_attitude_eq(
        &state.spatial.attitude,
        &Attitude::new(0.016, PI, 0.0),
        1e-12,
    );
}

#[test]
fn test_camera_chases_aircraft() {
    let mut app = TestAppBuilder::new().build();

    hold_for(&mut app, Control::ThrottleUp, 200);
    let state: AircraftState = aircraft_state(&mut app);

    let camera = app
        .query_single::<CameraComponent>()
        .expect("chase camera")
        .clone();
    assert_eq!(camera.target, state.spatial.position);

    // Facing south the camera trails to the north and above
    assert!(camera.position.z < state.spatial.position.z);
    assert!(camera.position.y > state.spatial.position.y);
}
