use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::{BiomeKind, Region};
use crate::utils::{REGION_OFFSET, REGION_SIZE};

/// Placement of one island in the world layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionLayout {
    pub kind: BiomeKind,
    pub center_x: f64,
    pub center_z: f64,
}

/// World build parameters, consumed once at startup
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub region_size: f64,
    pub regions: Vec<RegionLayout>,
    /// Grid resolution of each island's height mesh
    pub mesh_segments: u32,
    /// Scatter attempts per island
    pub props_per_region: usize,
    /// Seed for prop scatter. `None` scatters differently every run.
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            region_size: REGION_SIZE,
            regions: vec![
                RegionLayout {
                    kind: BiomeKind::Fields,
                    center_x: 0.0,
                    center_z: 0.0,
                },
                RegionLayout {
                    kind: BiomeKind::Arctic,
                    center_x: 0.0,
                    center_z: -REGION_OFFSET,
                },
                RegionLayout {
                    kind: BiomeKind::Desert,
                    center_x: REGION_OFFSET,
                    center_z: 0.0,
                },
                RegionLayout {
                    kind: BiomeKind::Forest,
                    center_x: -REGION_OFFSET,
                    center_z: 0.0,
                },
            ],
            mesh_segments: 64,
            props_per_region: 100,
            seed: None,
        }
    }
}

impl WorldConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Region descriptors in layout order
    pub fn build_regions(&self) -> Vec<Region> {
        self.regions
            .iter()
            .map(|layout| {
                Region::new(
                    layout.center_x,
                    layout.center_z,
                    self.region_size,
                    layout.kind,
                )
            })
            .collect()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.region_size <= 0.0 {
            return Err(format!(
                "region_size must be positive, got {}",
                self.region_size
            ));
        }
        if self.mesh_segments == 0 {
            return Err("mesh_segments must be at least 1".to_string());
        }
        Ok(())
    }
}
