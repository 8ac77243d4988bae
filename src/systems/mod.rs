pub mod camera;
pub mod collisions;
pub mod controller;
pub mod flight;
pub mod hud;
pub mod render;
pub mod terrain;

pub use camera::camera_follow_system;
pub use collisions::ground_height;
pub use controller::keyboard_input_system;
pub use flight::{
    clear_input_edges_system, flight_update_system, reset_aircraft, reset_aircraft_system,
    step_flight, FlightReport, FlightStatus, FlightTelemetry, ResetRequestEvent,
};
pub use hud::{hud_update_system, map_toggle_system};
pub use render::{aircraft_render_system, draw_map, map_render_system};
pub use terrain::{classify_footprint, height_at, scatter_props, shape_mask, HeightGrid};
