use bevy::prelude::*;
use rayon::prelude::*;

use crate::components::Region;
use crate::systems::terrain::height::height_at;

/// Displaced vertex grid for one island's ground mesh.
///
/// Laid out like a subdivided plane of `size x size` with `segments` quads per
/// side. Row `j` runs from the north edge (`z = center_z - size/2`) to the
/// south edge, column `i` from west to east.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightGrid {
    pub region: Region,
    pub segments: u32,
    /// Row-major heights, `(segments + 1)^2` entries
    pub heights: Vec<f64>,
}

impl HeightGrid {
    pub fn build(region: &Region, segments: u32) -> Self {
        let segments = segments.max(1);
        let stride = segments as usize + 1;

        let heights: Vec<f64> = (0..stride)
            .into_par_iter()
            .flat_map_iter(|j| {
                let region = *region;
                (0..stride).map(move |i| {
                    let (x, z) = vertex_world_position(&region, segments, i, j);
                    height_at(x, z, &region)
                })
            })
            .collect();

        debug!(
            "Built {} height grid: {} vertices",
            region.kind,
            heights.len()
        );

        Self {
            region: *region,
            segments,
            heights,
        }
    }

    pub fn stride(&self) -> usize {
        self.segments as usize + 1
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        let stride = self.stride();
        if i >= stride || j >= stride {
            return None;
        }
        self.heights.get(j * stride + i).copied()
    }

    /// World (x, z) of vertex (i, j)
    pub fn world_position(&self, i: usize, j: usize) -> (f64, f64) {
        vertex_world_position(&self.region, self.segments, i, j)
    }

    /// Highest vertex, useful for framing
    pub fn max_height(&self) -> f64 {
        self.heights
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

fn vertex_world_position(region: &Region, segments: u32, i: usize, j: usize) -> (f64, f64) {
    let step = region.size / segments as f64;
    let half = region.size / 2.0;
    let local_x = -half + i as f64 * step;
    let local_y = half - j as f64 * step;
    (region.center_x + local_x, region.center_z - local_y)
}
