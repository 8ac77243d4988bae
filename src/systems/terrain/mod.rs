pub mod height;
pub mod mesh;
pub mod noise;
pub mod props;

pub use height::{classify_footprint, height_at, shape_mask, Footprint};
pub use mesh::HeightGrid;
pub use noise::{hill_noise, NoiseOctave};
pub use props::scatter_props;
