use bevy::prelude::*;

use crate::components::{Region, TerrainFeatureComponent};
use crate::systems::collisions::ground_height;
use crate::systems::terrain::HeightGrid;

/// The built world. Filled once at startup and read-only afterwards.
#[derive(Resource, Debug, Clone, Default)]
pub struct TerrainState {
    pub regions: Vec<Region>,
    /// One displaced grid per region, same order as `regions`
    pub grids: Vec<HeightGrid>,
    pub features: Vec<TerrainFeatureComponent>,
}

impl TerrainState {
    pub fn new(regions: Vec<Region>) -> Self {
        Self {
            regions,
            ..Default::default()
        }
    }

    pub fn ground_height(&self, x: f64, z: f64, floor: f64) -> f64 {
        ground_height(&self.regions, x, z, floor)
    }

    pub fn debug_print_sizes(&self) {
        info!(
            "Terrain - Regions: {}, Grids: {}, Props: {}",
            self.regions.len(),
            self.grids.len(),
            self.features.len()
        );
    }
}
