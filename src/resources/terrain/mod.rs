mod state;

pub use state::TerrainState;
