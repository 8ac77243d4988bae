use bevy::prelude::*;

use crate::plugins::FlightSet;
use crate::resources::{HudReadout, MapCanvases, MapConfig, MapOverlay};
use crate::systems::{hud_update_system, map_render_system, map_toggle_system};

/// HUD text plus the minimap and full-map canvases.
pub struct HudPlugin {
    map: MapConfig,
}

impl HudPlugin {
    pub fn new(map: MapConfig) -> Self {
        Self { map }
    }
}

impl Default for HudPlugin {
    fn default() -> Self {
        Self::new(MapConfig::default())
    }
}

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        match MapCanvases::new(&self.map) {
            Ok(canvases) => {
                app.insert_resource(canvases);
            }
            Err(e) => error!("Map disabled: {}", e),
        }

        app.insert_resource(self.map.clone())
            .init_resource::<HudReadout>()
            .init_resource::<MapOverlay>()
            .add_systems(
                FixedUpdate,
                (map_toggle_system, hud_update_system, map_render_system)
                    .chain()
                    .in_set(FlightSet::Overlay),
            );
    }
}
