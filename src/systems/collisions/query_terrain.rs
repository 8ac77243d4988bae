use crate::components::Region;
use crate::systems::terrain::height_at;

/// Ground elevation under a world point.
///
/// Only regions whose centre is within `size * 0.7` of the point are sampled.
/// The result is the highest of those samples and `floor`, which stands in
/// for the ocean surface away from every island.
pub fn ground_height(regions: &[Region], x: f64, z: f64, floor: f64) -> f64 {
    regions
        .iter()
        .filter(|region| region.in_broad_phase(x, z))
        .map(|region| height_at(x, z, region))
        .fold(floor, f64::max)
}
