use islandhop::resources::WorldConfig;

/// Seeded world with coarse meshes so startup stays fast
pub fn create_test_world_config(seed: u64) -> WorldConfig {
    WorldConfig {
        mesh_segments: 16,
        ..WorldConfig::default().with_seed(seed)
    }
}
