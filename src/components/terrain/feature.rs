use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// A prop placed on the terrain at world build time.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerrainFeatureComponent {
    pub feature_type: FeatureType,
    /// World position, y on the terrain surface [m]
    pub position: Vector3<f64>,
}

/// FeatureType organized into variants to help with organization
#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq, Serialize, Deserialize)]
pub enum FeatureType {
    Tree(TreeVariant),
    Cactus,
}

#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq, Serialize, Deserialize)]
pub enum TreeVariant {
    /// Green cone on a brown trunk.
    Broadleaf,
    DarkPine,
    /// Four-sided white cone on a pale trunk.
    SnowPine,
}
