use bevy::log::LogPlugin;
use bevy::prelude::*;
use std::path::PathBuf;

use islandhop::{
    components::{AircraftState, Control, InputState},
    plugins::{AircraftPlugin, IslandhopPlugins},
    resources::{HudReadout, MapCanvases, SimulationConfig},
    systems::FlightTelemetry,
    utils::SimError,
};

const DEMO_SECONDS: f64 = 20.0;
/// Frames of nose-up input once full lift is available
const ROTATION_FRAMES: u64 = 20;
const MAP_OPEN_FRAME: u64 = 600;
const LOG_EVERY: u64 = 60;

/// Config plus a description of where it came from. Logged once the
/// `LogPlugin` is installed.
fn load_config() -> Result<(SimulationConfig, String), SimError> {
    if let Some(path) = std::env::args().nth(1) {
        let source = format!("config from {}", path);
        return Ok((SimulationConfig::load(path)?, source));
    }
    match SimulationConfig::default_path() {
        Some(path) if path.exists() => {
            let source = format!("config from {}", path.display());
            Ok((SimulationConfig::load(path)?, source))
        }
        _ => Ok((SimulationConfig::default(), "default config".to_string())),
    }
}

/// Controls held on `frame` of the scripted take-off. Power stays full and
/// the nose comes up once flying speed is reached.
fn scripted_controls(frame: u64, rotate_from: Option<u64>) -> Vec<Control> {
    let mut held = vec![Control::ThrottleUp];
    if rotate_from.map_or(false, |start| frame < start + ROTATION_FRAMES) {
        held.push(Control::PitchDown);
    }
    if frame == MAP_OPEN_FRAME {
        held.push(Control::MapToggle);
    }
    held
}

fn main() -> Result<(), SimError> {
    let (config, source) = load_config()?;
    let output_dir = std::env::args()
        .nth(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let dt = config.physics.timestep;
    let frames = (DEMO_SECONDS / dt).round() as u64;

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        .add_plugins(
            IslandhopPlugins::new(config.clone())
                .build()
                .set(AircraftPlugin::new(config.flight, config.start, config.physics).scripted()),
        );
    app.finish();
    app.cleanup();
    info!("Using {}", source);
    // Startup builds the world and spawns the aircraft
    app.update();

    let mut rotate_from = None;
    for frame in 0..frames {
        let held = scripted_controls(frame, rotate_from);
        if let Some(mut input) = app.world_mut().get_resource_mut::<InputState>() {
            for control in Control::ALL {
                input.set(control, held.contains(&control));
            }
        }
        app.world_mut().run_schedule(FixedUpdate);

        let world = app.world();
        let report = world.get_resource::<FlightTelemetry>().and_then(|t| t.last);
        if rotate_from.is_none() && report.map_or(false, |r| r.lift_factor >= 1.0) {
            info!("Rotating at frame {}", frame);
            rotate_from = Some(frame);
        }

        if frame % LOG_EVERY == 0 {
            let altitude = world
                .iter_entities()
                .find_map(|e| e.get::<AircraftState>().map(|s| s.spatial.position.y))
                .unwrap_or_default();
            if let Some(hud) = world.get_resource::<HudReadout>() {
                info!(
                    "t={:>5.2}s  {:<14} {:>8}  alt {:>7.1} m",
                    frame as f64 * dt,
                    hud.status,
                    hud.speed_kts,
                    altitude
                );
            }
        }
    }

    let canvases = app
        .world()
        .get_resource::<MapCanvases>()
        .ok_or_else(|| SimError::RenderError("map canvases were not created".into()))?;
    std::fs::create_dir_all(&output_dir)?;
    let minimap = output_dir.join("minimap.png");
    let full_map = output_dir.join("full_map.png");
    canvases.save_png(&minimap, &full_map)?;
    info!("Wrote {} and {}", minimap.display(), full_map.display());

    Ok(())
}
