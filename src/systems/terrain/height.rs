use crate::components::{BiomeKind, Region};
use crate::systems::terrain::noise::hill_noise;
use crate::utils::{
    AIRPORT_RADIUS, DEEP_WATER_ELEVATION, INTERIOR_BASE_HEIGHT, MASK_FALLOFF,
    MASK_UNDERWATER_CUTOFF, OCEAN_ELEVATION, RUNWAY_ELEVATION, RUNWAY_HALF_LENGTH,
    RUNWAY_HALF_WIDTH,
};

// Star lobes of the arctic footprint
const ARCTIC_LOBES: f64 = 5.0;
const ARCTIC_LOBE_DEPTH: f64 = 0.3;

// Desert bar half extents and rounded falloff band, normalised units
const DESERT_HALF_WIDTH: f64 = 0.8;
const DESERT_HALF_HEIGHT: f64 = 0.4;
const DESERT_BAND: f64 = 0.2;

// Circle bitten out of the forest disc to make the crescent
const FOREST_BITE_CENTER_U: f64 = 0.5;
const FOREST_BITE_RADIUS: f64 = 0.4;

/// Offset of a world point from the region centre in normalised units
#[derive(Debug, Clone, Copy)]
struct Normalized {
    dx: f64,
    dz: f64,
    u: f64,
    v: f64,
    d: f64,
}

impl Normalized {
    fn new(x: f64, z: f64, region: &Region) -> Self {
        let dx = x - region.center_x;
        let dz = z - region.center_z;
        let radius = region.radius();
        let u = dx / radius;
        let v = dz / radius;
        Self {
            dx,
            dz,
            u,
            v,
            d: (u * u + v * v).sqrt(),
        }
    }
}

/// Linear ramp from the footprint edge inward, saturating at 1
#[inline]
fn ramp(inside_by: f64) -> f64 {
    (inside_by * MASK_FALLOFF).min(1.0)
}

fn raw_mask(p: &Normalized, kind: BiomeKind) -> f64 {
    match kind {
        BiomeKind::Fields => {
            if p.d < 1.0 {
                ramp(1.0 - p.d)
            } else {
                0.0
            }
        }
        BiomeKind::Arctic => {
            let angle = p.dz.atan2(p.dx);
            let r_norm = 1.0 + ARCTIC_LOBE_DEPTH * (ARCTIC_LOBES * angle).sin();
            if p.d < r_norm {
                ramp(r_norm - p.d)
            } else {
                0.0
            }
        }
        BiomeKind::Desert => {
            let bx = (p.u.abs() - DESERT_HALF_WIDTH).max(0.0);
            let bz = (p.v.abs() - DESERT_HALF_HEIGHT).max(0.0);
            let dist_box = (bx * bx + bz * bz).sqrt();
            if dist_box < DESERT_BAND {
                ramp(DESERT_BAND - dist_box)
            } else {
                0.0
            }
        }
        BiomeKind::Forest => {
            let d_bite = ((p.u - FOREST_BITE_CENTER_U).powi(2) + p.v.powi(2)).sqrt();
            if p.d < 1.0 && d_bite > FOREST_BITE_RADIUS {
                ramp(1.0 - p.d).min(ramp(d_bite - FOREST_BITE_RADIUS))
            } else {
                0.0
            }
        }
    }
}

/// How far inside the region's footprint a world point lies, in [0, 1].
pub fn shape_mask(x: f64, z: f64, region: &Region) -> f64 {
    raw_mask(&Normalized::new(x, z, region), region.kind).clamp(0.0, 1.0)
}

/// Ground elevation of `region` at a world point.
///
/// Pure: the same inputs always give the same bits, so the mesh builder and
/// the runtime collision query agree wherever they overlap. Points outside
/// the footprint return the deep water floor; the Fields airport disc is
/// pinned to runway elevation.
pub fn height_at(x: f64, z: f64, region: &Region) -> f64 {
    let p = Normalized::new(x, z, region);
    let mask = raw_mask(&p, region.kind).clamp(0.0, 1.0);

    if mask <= MASK_UNDERWATER_CUTOFF {
        return DEEP_WATER_ELEVATION;
    }

    if region.kind == BiomeKind::Fields && (p.dx * p.dx + p.dz * p.dz).sqrt() < AIRPORT_RADIUS {
        return RUNWAY_ELEVATION;
    }

    let noise = hill_noise(x, z);
    DEEP_WATER_ELEVATION + (INTERIOR_BASE_HEIGHT + noise.max(0.0)) * mask
}

/// Outcome of testing a point for procedural placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Footprint {
    /// Outside the island's shape mask.
    Outside,
    /// Inside an exclusion zone (the Fields runway strip).
    Excluded,
    /// On the island but below the ocean surface.
    Submerged,
    /// Valid placement at this ground height.
    Inside { height: f64 },
}

impl Footprint {
    pub fn height(&self) -> Option<f64> {
        match self {
            Footprint::Inside { height } => Some(*height),
            _ => None,
        }
    }
}

/// Decide whether a prop may be placed at a world point of `region`.
pub fn classify_footprint(x: f64, z: f64, region: &Region) -> Footprint {
    let dx = x - region.center_x;
    let dz = z - region.center_z;

    if region.kind == BiomeKind::Fields
        && dx.abs() < RUNWAY_HALF_WIDTH
        && dz.abs() < RUNWAY_HALF_LENGTH
    {
        return Footprint::Excluded;
    }

    if shape_mask(x, z, region) <= MASK_UNDERWATER_CUTOFF {
        return Footprint::Outside;
    }

    let height = height_at(x, z, region);
    if height > OCEAN_ELEVATION {
        Footprint::Inside { height }
    } else {
        Footprint::Submerged
    }
}
