pub const GRAVITY: f64 = 9.8; // m/s^2, arcade value

/// Fixed physics step applied every frame, independent of the measured frame time.
pub const FIXED_TIMESTEP: f64 = 0.016;
/// Rate the frame callback is scheduled at.
pub const FRAME_RATE_HZ: f64 = 60.0;

// World layout
pub const REGION_SIZE: f64 = 2500.0;
pub const REGION_OFFSET: f64 = 3500.0;
pub const REGION_RADIUS_DIVISOR: f64 = 2.2;
pub const BROAD_PHASE_FACTOR: f64 = 0.7;

// Elevations
pub const DEEP_WATER_ELEVATION: f64 = -50.0;
pub const OCEAN_ELEVATION: f64 = -10.0;
pub const RUNWAY_ELEVATION: f64 = -4.1;
pub const INTERIOR_BASE_HEIGHT: f64 = 46.0;
pub const AIRPORT_RADIUS: f64 = 300.0;

// Shape masks
pub const MASK_FALLOFF: f64 = 5.0;
pub const MASK_UNDERWATER_CUTOFF: f64 = 0.01;

// Runway strip excluded from prop placement (half extents)
pub const RUNWAY_HALF_WIDTH: f64 = 40.0;
pub const RUNWAY_HALF_LENGTH: f64 = 350.0;
