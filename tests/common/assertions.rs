use approx::assert_relative_eq;
use islandhop::components::{AircraftState, Attitude};
use nalgebra::Vector3;

/// Assert that the aircraft state holds its per-frame invariants
#[track_caller]
pub fn assert_aircraft_state_valid(state: &AircraftState) {
    let spatial = &state.spatial;

    // Verify position is finite
    assert!(spatial.position.x.is_finite(), "Position x is not finite");
    assert!(spatial.position.y.is_finite(), "Position y is not finite");
    assert!(spatial.position.z.is_finite(), "Position z is not finite");

    assert!(
        spatial.velocity.iter().all(|v| v.is_finite()),
        "Velocity is not finite"
    );

    assert!(state.speed >= 0.0, "Speed is negative: {}", state.speed);
    assert!(
        (0.0..=1.0).contains(&state.throttle),
        "Throttle out of range: {}",
        state.throttle
    );
    assert!(spatial.attitude.pitch.is_finite());
    assert!(spatial.attitude.yaw.is_finite());
    assert!(spatial.attitude.roll.is_finite());
}

/// Assert two positions agree within `epsilon` metres on every axis
#[track_caller]
pub fn assert_position_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}

#[track_caller]
pub fn assert_attitude_eq(actual: &Attitude, expected: &Attitude, epsilon: f64) {
    assert_relative_eq!(actual.pitch, expected.pitch, epsilon = epsilon);
    assert_relative_eq!(actual.yaw, expected.yaw, epsilon = epsilon);
    assert_relative_eq!(actual.roll, expected.roll, epsilon = epsilon);
}

/// Assert a canvas pixel is an opaque colour
#[track_caller]
pub fn assert_rgb_eq(canvas: &tiny_skia::Pixmap, x: u32, y: u32, expected: [u8; 3]) {
    let pixel = canvas.pixel(x, y).expect("pixel outside canvas");
    assert_eq!(
        [pixel.red(), pixel.green(), pixel.blue(), pixel.alpha()],
        [expected[0], expected[1], expected[2], 255],
        "pixel ({}, {})",
        x,
        y
    );
}
