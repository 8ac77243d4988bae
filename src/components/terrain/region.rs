use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::terrain::BiomeKind;
use crate::utils::{horizontal_distance, BROAD_PHASE_FACTOR, REGION_RADIUS_DIVISOR};

/// Descriptor of one island. Built once at world build time, immutable after.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub center_x: f64,
    pub center_z: f64,
    /// Edge length of the square the island is generated in [m]
    pub size: f64,
    pub kind: BiomeKind,
}

impl Region {
    pub fn new(center_x: f64, center_z: f64, size: f64, kind: BiomeKind) -> Self {
        Self {
            center_x,
            center_z,
            size,
            kind,
        }
    }

    /// Radius that normalised footprint coordinates are measured against
    pub fn radius(&self) -> f64 {
        self.size / REGION_RADIUS_DIVISOR
    }

    /// Horizontal distance from the island centre
    pub fn distance_to(&self, x: f64, z: f64) -> f64 {
        horizontal_distance(x, z, self.center_x, self.center_z)
    }

    /// Cheap proximity test before sampling the height field
    pub fn in_broad_phase(&self, x: f64, z: f64) -> bool {
        self.distance_to(x, z) < self.size * BROAD_PHASE_FACTOR
    }
}
