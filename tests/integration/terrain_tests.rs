use islandhop::{
    components::{Region, TerrainFeatureComponent},
    resources::TerrainState,
    systems::terrain::{classify_footprint, height_at, Footprint},
};
use pretty_assertions::assert_eq;

use crate::common::{create_test_world_config, TestAppBuilder};

#[test]
fn test_world_built_at_startup() {
    let mut app = TestAppBuilder::new()
        .with_world(create_test_world_config(42))
        .build();

    let terrain = app.get_state::<TerrainState>().expect("terrain").clone();
    assert_eq!(terrain.regions.len(), 4);
    assert_eq!(terrain.grids.len(), 4);
    for grid in &terrain.grids {
        assert_eq!(grid.heights.len(), 17 * 17);
    }

    let regions = app.query_all::<Region>().len();
    assert_eq!(regions, 4);
    let props = app.query_all::<TerrainFeatureComponent>().len();
    assert_eq!(props, terrain.features.len());
}

#[test]
fn test_props_are_valid_placements() {
    let app = TestAppBuilder::new()
        .with_world(create_test_world_config(7))
        .build();
    let terrain = app.get_state::<TerrainState>().expect("terrain");

    for feature in &terrain.features {
        let p = feature.position;
        let owner = terrain
            .regions
            .iter()
            .find(|r| {
                (p.x - r.center_x).abs() <= r.size / 2.0
                    && (p.z - r.center_z).abs() <= r.size / 2.0
                    && r.kind.feature() == feature.feature_type
            })
            .expect("prop outside every region");
        assert_eq!(
            classify_footprint(p.x, p.z, owner),
            Footprint::Inside {
                height: height_at(p.x, p.z, owner)
            }
        );
    }
}

#[test]
fn test_seeded_worlds_match() {
    let a = TestAppBuilder::new()
        .with_world(create_test_world_config(1234))
        .build();
    let b = TestAppBuilder::new()
        .with_world(create_test_world_config(1234))
        .build();

    let ta = a.get_state::<TerrainState>().expect("terrain");
    let tb = b.get_state::<TerrainState>().expect("terrain");
    assert_eq!(ta.features, tb.features);
    assert_eq!(ta.grids, tb.grids);
}

#[test]
fn test_runtime_ground_matches_mesh() {
    let app = TestAppBuilder::new()
        .with_world(create_test_world_config(3))
        .build();
    let terrain = app.get_state::<TerrainState>().expect("terrain");

    // The runway vertex of the fields grid is what collision sees
    let fields = &terrain.grids[0];
    let mid = fields.stride() / 2;
    let (x, z) = fields.world_position(mid, mid);
    assert_eq!(
        Some(terrain.ground_height(x, z, -10.0)),
        fields.get(mid, mid)
    );
}
