use bevy::prelude::*;
use tiny_skia::Pixmap;

use crate::resources::MapConfig;
use crate::utils::SimError;

/// Text shown on the heads-up display, refreshed every frame.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct HudReadout {
    pub status: String,
    pub speed_kts: String,
}

impl Default for HudReadout {
    fn default() -> Self {
        Self {
            status: "Throttle: 0%".to_string(),
            speed_kts: "0 kts".to_string(),
        }
    }
}

/// Which map canvases are on screen.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapOverlay {
    pub minimap_visible: bool,
    pub full_map_open: bool,
}

impl Default for MapOverlay {
    fn default() -> Self {
        Self {
            minimap_visible: true,
            full_map_open: false,
        }
    }
}

impl MapOverlay {
    pub fn toggle_full_map(&mut self) {
        self.full_map_open = !self.full_map_open;
        info!(
            "Full map {}",
            if self.full_map_open { "opened" } else { "closed" }
        );
    }
}

/// Offscreen canvases the map system draws into
#[derive(Resource)]
pub struct MapCanvases {
    pub minimap: Pixmap,
    pub full_map: Pixmap,
}

impl MapCanvases {
    pub fn new(config: &MapConfig) -> Result<Self, SimError> {
        Ok(Self {
            minimap: Self::canvas(config.minimap_size)?,
            full_map: Self::canvas(config.full_map_size)?,
        })
    }

    fn canvas(size: u32) -> Result<Pixmap, SimError> {
        Pixmap::new(size, size)
            .ok_or_else(|| SimError::RenderError(format!("Failed to create {size}px map canvas")))
    }

    pub fn save_png<P: AsRef<std::path::Path>>(
        &self,
        minimap_path: P,
        full_map_path: P,
    ) -> Result<(), SimError> {
        self.minimap
            .save_png(minimap_path)
            .map_err(|e| SimError::RenderError(e.to_string()))?;
        self.full_map
            .save_png(full_map_path)
            .map_err(|e| SimError::RenderError(e.to_string()))?;
        Ok(())
    }
}
