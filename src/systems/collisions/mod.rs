mod query_terrain;

pub use query_terrain::ground_height;
