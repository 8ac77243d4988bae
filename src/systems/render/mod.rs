mod aircraft;
mod map;

pub use aircraft::{aircraft_render_system, attitude_to_quat};
pub use map::{
    biome_rgb, draw_map, map_render_system, region_outline, AircraftMarker, MapShape, MapView,
};
