use bevy::prelude::*;
use glam::Vec2;
use std::f32::consts::{PI, TAU};
use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Rect, Stroke, Transform as SkiaTransform};

use crate::components::{AircraftState, BiomeKind, PlayerController, Region};
use crate::resources::{MapCanvases, MapConfig, MapOverlay, TerrainState};
use crate::utils::REGION_RADIUS_DIVISOR;

const OCEAN_RGB: [u8; 3] = [0x1d, 0xa2, 0xd8];
const ARC_SEGMENTS: usize = 48;
const STAR_POINTS: usize = 5;

// Aircraft arrow in map units, nose up before rotation
const MARKER_OUTLINE: [(f32, f32); 4] = [(0.0, -150.0), (80.0, 100.0), (0.0, 70.0), (-80.0, 100.0)];
const MARKER_STROKE_WIDTH: f32 = 20.0;

/// Fill colour of a region on the map
pub fn biome_rgb(kind: BiomeKind) -> [u8; 3] {
    match kind {
        BiomeKind::Fields => [0x55, 0xaa, 0x55],
        BiomeKind::Arctic => [0xff, 0xff, 0xff],
        BiomeKind::Desert => [0xee, 0xdd, 0xaa],
        BiomeKind::Forest => [0x00, 0x44, 0x00],
    }
}

/// Map silhouette of a region in world (x, z) units
#[derive(Debug, Clone, PartialEq)]
pub enum MapShape {
    Polygon(Vec<Vec2>),
    Rect { center: Vec2, width: f32, height: f32 },
    Circle { center: Vec2, radius: f32 },
}

impl MapShape {
    fn to_path(&self) -> Option<Path> {
        match self {
            MapShape::Polygon(points) => polygon_path(points.iter().copied()),
            MapShape::Rect {
                center,
                width,
                height,
            } => Rect::from_xywh(
                center.x - width / 2.0,
                center.y - height / 2.0,
                *width,
                *height,
            )
            .map(PathBuilder::from_rect),
            MapShape::Circle { center, radius } => {
                PathBuilder::from_circle(center.x, center.y, *radius)
            }
        }
    }
}

/// Simplified outline of a region for the map.
///
/// Arctic is a five-point star, Desert a centred bar, Forest a disc with a
/// wedge cut off by the chord between its arc ends, Fields a plain disc.
pub fn region_outline(region: &Region) -> MapShape {
    let center = Vec2::new(region.center_x as f32, region.center_z as f32);
    let r = region.size as f32 / REGION_RADIUS_DIVISOR as f32;

    match region.kind {
        BiomeKind::Arctic => {
            let vertices = STAR_POINTS * 2;
            let points = (0..vertices)
                .map(|i| {
                    let angle = i as f32 / vertices as f32 * TAU - PI / 2.0;
                    let radius = if i % 2 == 0 { r } else { r * 0.5 };
                    center + Vec2::from_angle(angle) * radius
                })
                .collect();
            MapShape::Polygon(points)
        }
        BiomeKind::Desert => MapShape::Rect {
            center,
            width: r * 1.6,
            height: r * 0.8,
        },
        BiomeKind::Forest => {
            let (start, end) = (0.5, TAU - 0.5);
            let points = (0..=ARC_SEGMENTS)
                .map(|i| {
                    let angle = start + (end - start) * i as f32 / ARC_SEGMENTS as f32;
                    center + Vec2::from_angle(angle) * r
                })
                .collect();
            MapShape::Polygon(points)
        }
        BiomeKind::Fields => MapShape::Circle { center, radius: r },
    }
}

/// Portion of the world shown on a canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    /// World (x, z) at the canvas centre
    pub focus: Vec2,
    /// World span across the canvas width
    pub range: f32,
}

impl MapView {
    pub fn new(focus: Vec2, range: f32) -> Self {
        Self { focus, range }
    }

    /// World to pixel transform for a canvas `width` x `height`
    pub fn transform(&self, width: f32, height: f32) -> SkiaTransform {
        let scale = width / self.range;
        SkiaTransform::from_translate(width / 2.0, height / 2.0)
            .pre_scale(scale, scale)
            .pre_translate(-self.focus.x, -self.focus.y)
    }
}

/// Player arrow drawn over the regions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AircraftMarker {
    pub position: Vec2,
    pub yaw: f32,
}

impl AircraftMarker {
    pub fn from_state(state: &AircraftState) -> Self {
        let p = state.spatial.position;
        Self {
            position: Vec2::new(p.x as f32, p.z as f32),
            yaw: state.spatial.attitude.yaw as f32,
        }
    }

    fn transform(&self) -> SkiaTransform {
        let (sin, cos) = self.yaw.sin_cos();
        SkiaTransform::from_row(cos, sin, -sin, cos, self.position.x, self.position.y)
    }
}

fn polygon_path<I: IntoIterator<Item = Vec2>>(points: I) -> Option<Path> {
    let mut pb = PathBuilder::new();
    for (i, p) in points.into_iter().enumerate() {
        if i == 0 {
            pb.move_to(p.x, p.y);
        } else {
            pb.line_to(p.x, p.y);
        }
    }
    pb.close();
    pb.finish()
}

fn solid_paint([r, g, b]: [u8; 3]) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, 255);
    paint.anti_alias = true;
    paint
}

/// Draw the ocean, every region and the optional aircraft marker.
///
/// Overwrites the whole canvas; nothing carries over between calls.
pub fn draw_map(
    canvas: &mut Pixmap,
    regions: &[Region],
    view: &MapView,
    marker: Option<&AircraftMarker>,
) {
    let [r, g, b] = OCEAN_RGB;
    canvas.fill(tiny_skia::Color::from_rgba8(r, g, b, 255));

    let world = view.transform(canvas.width() as f32, canvas.height() as f32);

    for region in regions {
        if let Some(path) = region_outline(region).to_path() {
            canvas.fill_path(
                &path,
                &solid_paint(biome_rgb(region.kind)),
                FillRule::Winding,
                world,
                None,
            );
        }
    }

    if let Some(marker) = marker {
        let Some(path) = polygon_path(MARKER_OUTLINE.iter().map(|&(x, y)| Vec2::new(x, y)))
        else {
            return;
        };
        let transform = world.pre_concat(marker.transform());
        canvas.fill_path(
            &path,
            &solid_paint([0xff, 0x00, 0x00]),
            FillRule::Winding,
            transform,
            None,
        );
        let stroke = Stroke {
            width: MARKER_STROKE_WIDTH,
            ..Default::default()
        };
        canvas.stroke_path(
            &path,
            &solid_paint([0xff, 0xff, 0xff]),
            &stroke,
            transform,
            None,
        );
    }
}

/// Redraw the minimap around the aircraft, and the full map while it is open
pub fn map_render_system(
    aircraft: Query<&AircraftState, With<PlayerController>>,
    terrain: Res<TerrainState>,
    overlay: Res<MapOverlay>,
    config: Res<MapConfig>,
    canvases: Option<ResMut<MapCanvases>>,
) {
    let (Some(mut canvases), Ok(state)) = (canvases, aircraft.get_single()) else {
        return;
    };
    let marker = AircraftMarker::from_state(state);

    if overlay.minimap_visible {
        let view = MapView::new(marker.position, config.minimap_range);
        draw_map(&mut canvases.minimap, &terrain.regions, &view, Some(&marker));
    }
    if overlay.full_map_open {
        let view = MapView::new(Vec2::ZERO, config.full_map_range);
        draw_map(&mut canvases.full_map, &terrain.regions, &view, Some(&marker));
    }
}
