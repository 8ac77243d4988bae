use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Map overlay canvases
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub minimap_size: u32,
    /// World span shown across the minimap width [m]
    pub minimap_range: f32,
    pub full_map_size: u32,
    pub full_map_range: f32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            minimap_size: 200,
            minimap_range: 5000.0,
            full_map_size: 800,
            full_map_range: 15000.0,
        }
    }
}
