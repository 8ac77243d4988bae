use bevy::prelude::*;
use nalgebra::Vector3;
use rand::Rng;

use crate::components::{Region, TerrainFeatureComponent};
use crate::systems::terrain::height::classify_footprint;

/// Scatter up to `count` props of the region's biome.
///
/// Each sample is drawn uniformly over the region's square and kept only when
/// the footprint test places it on dry land outside the runway strip, so the
/// result is usually shorter than `count`.
pub fn scatter_props<R: Rng>(
    region: &Region,
    count: usize,
    rng: &mut R,
) -> Vec<TerrainFeatureComponent> {
    let half = region.size / 2.0;
    let feature_type = region.kind.feature();

    let props: Vec<TerrainFeatureComponent> = (0..count)
        .filter_map(|_| {
            let x = region.center_x + rng.gen_range(-half..half);
            let z = region.center_z + rng.gen_range(-half..half);
            classify_footprint(x, z, region)
                .height()
                .map(|height| TerrainFeatureComponent {
                    feature_type,
                    position: Vector3::new(x, height, z),
                })
        })
        .collect();

    debug!(
        "Scattered {}/{} {} props",
        props.len(),
        count,
        region.kind
    );
    props
}
