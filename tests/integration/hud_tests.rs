use islandhop::{
    components::{AircraftState, BiomeKind, Control},
    resources::{HudReadout, MapCanvases, MapOverlay},
    systems::render::biome_rgb,
};
use pretty_assertions::assert_eq;

use crate::common::{aircraft_state, assert_rgb_eq, hold_for, TestAppBuilder};

#[test]
fn test_hud_tracks_throttle_and_speed() {
    let mut app = TestAppBuilder::new().build();

    hold_for(&mut app, Control::ThrottleUp, 90);
    let state: AircraftState = aircraft_state(&mut app);
    let hud = app.get_state::<HudReadout>().expect("hud").clone();

    assert_eq!(
        hud.status,
        format!("Throttle: {}%", (state.throttle * 100.0).floor())
    );
    assert_eq!(hud.speed_kts, format!("{} kts", state.speed.floor()));
}

#[test]
fn test_hud_shows_engine_off() {
    let mut app = TestAppBuilder::new().build();

    app.press(Control::EngineToggle);
    app.run_frame();
    app.run_frame();

    let hud = app.get_state::<HudReadout>().expect("hud");
    // The first step starts on the threshold and stalls, the second is parked
    assert_eq!(hud.status, "Engine OFF");
}

#[test]
fn test_map_toggle_opens_full_map() {
    let mut app = TestAppBuilder::new().build();

    app.run_frame();
    {
        let overlay = app.get_state::<MapOverlay>().expect("overlay");
        assert!(!overlay.full_map_open);
        let canvases = app.get_state::<MapCanvases>().expect("canvases");
        // Never drawn while closed
        assert_eq!(canvases.full_map.pixel(0, 0).map(|p| p.alpha()), Some(0));
    }

    app.press(Control::MapToggle);
    app.run_steps(5);
    assert!(app.get_state::<MapOverlay>().expect("overlay").full_map_open);

    let canvases = app.get_state::<MapCanvases>().expect("canvases");
    assert_rgb_eq(&canvases.full_map, 0, 0, [0x1d, 0xa2, 0xd8]);
    // Home island under the centre of the world view, marker drawn south of it
    assert_rgb_eq(&canvases.full_map, 400, 380, biome_rgb(BiomeKind::Fields));

    app.release(Control::MapToggle);
    app.run_frame();
    app.press(Control::MapToggle);
    app.run_frame();
    assert!(!app.get_state::<MapOverlay>().expect("overlay").full_map_open);
}

#[test]
fn test_minimap_follows_aircraft() {
    let mut app = TestAppBuilder::new().build();
    app.run_frame();

    let canvases = app.get_state::<MapCanvases>().expect("canvases");
    // Marker at the centre, the fields island around it
    assert_rgb_eq(&canvases.minimap, 100, 100, [0xff, 0x00, 0x00]);
    assert_rgb_eq(&canvases.minimap, 100, 60, biome_rgb(BiomeKind::Fields));
    assert_rgb_eq(&canvases.minimap, 2, 2, [0x1d, 0xa2, 0xd8]);
}
