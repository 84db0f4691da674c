//! Isometric projection between grid cells and screen pixels
//!
//! A grid position `(x, y)` maps to the centre of a diamond-shaped tile.
//! Tile size comes from the [`GridSpec`], so the same helpers serve any
//! renderer scale.

use serde::{Deserialize, Serialize};

use crate::grid::GridSpec;
use crate::layout::GridPoint;
use crate::scene::{CellKey, SceneObject};

/// A position in screen pixels relative to the projection origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

fn half_tile(grid: &GridSpec) -> (f64, f64) {
    (
        f64::from(grid.tile_width) / 2.0,
        f64::from(grid.tile_height) / 2.0,
    )
}

/// Project a grid position to screen coordinates
pub fn to_isometric(x: f64, y: f64, grid: &GridSpec) -> ScreenPoint {
    let (half_w, half_h) = half_tile(grid);
    ScreenPoint::new((x - y) * half_w, (x + y) * half_h)
}

/// Inverse of [`to_isometric`]
pub fn from_isometric(point: ScreenPoint, grid: &GridSpec) -> GridPoint {
    let (half_w, half_h) = half_tile(grid);
    let u = point.x / half_w;
    let v = point.y / half_h;
    GridPoint::new((u + v) / 2.0, (v - u) / 2.0)
}

/// The cell whose centre is nearest to a screen position
pub fn pick_cell(point: ScreenPoint, grid: &GridSpec) -> CellKey {
    let p = from_isometric(point, grid);
    CellKey::new(p.x.round() as i64, p.y.round() as i64)
}

/// Draw-order key: larger values are nearer the viewer
pub fn depth(x: f64, y: f64) -> i64 {
    ((x + y) * 100.0).floor() as i64
}

/// Anything standing on the grid
pub trait GridPositioned {
    fn grid_position(&self) -> (f64, f64);
}

impl GridPositioned for GridPoint {
    fn grid_position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl GridPositioned for SceneObject {
    fn grid_position(&self) -> (f64, f64) {
        (self.grid_x, self.grid_y)
    }
}

/// Sort far-to-near by `x + y`. Ties keep their original order.
pub fn sort_by_depth<T: GridPositioned>(items: &mut [T]) {
    items.sort_by(|a, b| {
        let (ax, ay) = a.grid_position();
        let (bx, by) = b.grid_position();
        (ax + ay).total_cmp(&(bx + by))
    });
}

/// Corners of the tile diamond centred on a grid position: top, right, bottom, left
pub fn tile_vertices(x: f64, y: f64, grid: &GridSpec) -> [ScreenPoint; 4] {
    let centre = to_isometric(x, y, grid);
    let (half_w, half_h) = half_tile(grid);
    [
        ScreenPoint::new(centre.x, centre.y - half_h),
        ScreenPoint::new(centre.x + half_w, centre.y),
        ScreenPoint::new(centre.x, centre.y + half_h),
        ScreenPoint::new(centre.x - half_w, centre.y),
    ]
}

/// Hit test a screen point against a tile diamond (even-odd ray casting)
pub fn point_in_tile(point: ScreenPoint, x: f64, y: f64, grid: &GridSpec) -> bool {
    let vertices = tile_vertices(x, y, grid);
    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let (a, b) = (vertices[i], vertices[j]);
        if (a.y > point.y) != (b.y > point.y)
            && point.x < (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}
