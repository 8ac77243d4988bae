use bevy::prelude::*;

use crate::components::{Control, InputState};
use crate::resources::{HudReadout, MapOverlay};
use crate::systems::flight::FlightTelemetry;

/// Copy the last flight report into the HUD text
pub fn hud_update_system(telemetry: Res<FlightTelemetry>, mut hud: ResMut<HudReadout>) {
    let Some(report) = telemetry.last else {
        return;
    };
    let status = report.status.to_string();
    if hud.status != status {
        debug!("HUD status: {}", status);
        hud.status = status;
    }
    hud.speed_kts = report.speed_readout();
}

/// Open or close the full map on the toggle's rising edge
pub fn map_toggle_system(input: Res<InputState>, mut overlay: ResMut<MapOverlay>) {
    if input.just_pressed(Control::MapToggle) {
        overlay.toggle_full_map();
    }
}
