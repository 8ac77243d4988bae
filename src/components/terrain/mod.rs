use serde::{Deserialize, Serialize};
use std::fmt;

mod feature;
mod region;

pub use feature::{FeatureType, TerrainFeatureComponent, TreeVariant};
pub use region::Region;

/// The four island footprints the world is built from.
#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq, Serialize, Deserialize)]
pub enum BiomeKind {
    Fields,
    Arctic,
    Desert,
    Forest,
}

impl BiomeKind {
    pub const ALL: [BiomeKind; 4] = [
        BiomeKind::Fields,
        BiomeKind::Arctic,
        BiomeKind::Desert,
        BiomeKind::Forest,
    ];

    /// Prop scattered over this biome
    pub fn feature(&self) -> FeatureType {
        match self {
            BiomeKind::Fields => FeatureType::Tree(TreeVariant::Broadleaf),
            BiomeKind::Forest => FeatureType::Tree(TreeVariant::DarkPine),
            BiomeKind::Arctic => FeatureType::Tree(TreeVariant::SnowPine),
            BiomeKind::Desert => FeatureType::Cactus,
        }
    }
}

impl Default for BiomeKind {
    fn default() -> Self {
        BiomeKind::Fields
    }
}

impl fmt::Display for BiomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BiomeKind::Fields => "fields",
            BiomeKind::Arctic => "arctic",
            BiomeKind::Desert => "desert",
            BiomeKind::Forest => "forest",
        };
        write!(f, "{}", name)
    }
}
