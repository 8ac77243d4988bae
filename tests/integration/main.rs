#[path = "../common/mod.rs"]
mod common;

mod aircraft_tests;
mod hud_tests;
mod terrain_tests;
