use bevy::prelude::*;
use rayon::prelude::*;

use crate::plugins::StartupStage;
use crate::resources::{TerrainState, WorldConfig};
use crate::systems::terrain::{scatter_props, HeightGrid};
use crate::utils::RngManager;

/// Builds the islands once at startup.
pub struct TerrainPlugin {
    config: WorldConfig,
}

impl TerrainPlugin {
    pub fn new(config: WorldConfig) -> Self {
        Self { config }
    }
}

impl Default for TerrainPlugin {
    fn default() -> Self {
        Self::new(WorldConfig::default())
    }
}

impl Plugin for TerrainPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .insert_resource(TerrainState::new(self.config.build_regions()))
            .add_systems(Startup, build_world.in_set(StartupStage::BuildTerrain));
    }
}

/// Build height grids and scatter props for every region.
pub fn build_terrain(config: &WorldConfig) -> TerrainState {
    let regions = config.build_regions();
    let rngs = RngManager::new(config.seed);

    let grids = regions
        .par_iter()
        .map(|region| HeightGrid::build(region, config.mesh_segments))
        .collect();

    let features = regions
        .iter()
        .flat_map(|region| {
            let mut rng = rngs.get_rng(&format!("props/{}", region.kind));
            scatter_props(region, config.props_per_region, &mut rng)
        })
        .collect();

    TerrainState {
        regions,
        grids,
        features,
    }
}

fn build_world(mut commands: Commands, config: Res<WorldConfig>) {
    let terrain = build_terrain(&config);
    terrain.debug_print_sizes();

    for region in &terrain.regions {
        commands.spawn((
            *region,
            Name::new(format!("{} island", region.kind)),
        ));
    }
    for feature in &terrain.features {
        commands.spawn((
            *feature,
            Transform::from_xyz(
                feature.position.x as f32,
                feature.position.y as f32,
                feature.position.z as f32,
            ),
        ));
    }

    commands.insert_resource(terrain);
}
