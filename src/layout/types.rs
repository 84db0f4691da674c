//! Core types for the zoning and layout engine

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grid::GridSpec;
use crate::scene::SceneObject;

/// A point on the office grid. Fractional values offset within a cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridPoint {
    pub x: f64,
    pub y: f64,
}

impl GridPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A rectangle of whole grid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
}

impl Rect {
    pub fn new(x: i64, y: i64, w: i64, h: i64) -> Self {
        Self { x, y, w, h }
    }

    /// Build a rectangle from inclusive corner cells
    pub fn from_corners(start_x: i64, start_y: i64, end_x: i64, end_y: i64) -> Self {
        Self::new(start_x, start_y, end_x - start_x + 1, end_y - start_y + 1)
    }

    /// Last column inside the rectangle
    pub fn end_x(&self) -> i64 {
        self.x + self.w - 1
    }

    /// Last row inside the rectangle
    pub fn end_y(&self) -> i64 {
        self.y + self.h - 1
    }

    pub fn area(&self) -> i64 {
        self.w * self.h
    }

    pub fn contains_cell(&self, x: i64, y: i64) -> bool {
        x >= self.x && x <= self.end_x() && y >= self.y && y <= self.end_y()
    }

    /// Check if this rectangle lies within a `width` x `height` grid
    pub fn within(&self, width: i64, height: i64) -> bool {
        self.x >= 0 && self.y >= 0 && self.x + self.w <= width && self.y + self.h <= height
    }

    /// The part of this rectangle inside a `width` x `height` grid, if any
    pub fn clipped(&self, width: i64, height: i64) -> Option<Rect> {
        let x = self.x.max(0);
        let y = self.y.max(0);
        let end_x = (self.x + self.w).min(width);
        let end_y = (self.y + self.h).min(height);
        (end_x > x && end_y > y).then(|| Rect::new(x, y, end_x - x, end_y - y))
    }

    /// Check if two rectangles share at least one cell
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }

    /// Iterate every cell of the rectangle, row by row
    pub fn cells(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        (self.y..self.y + self.h).flat_map(move |y| (self.x..self.x + self.w).map(move |x| (x, y)))
    }
}

/// Functional purpose of a zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneKind {
    Work,
    Meet,
    Rest,
    Admin,
    Walkway,
}

impl ZoneKind {
    pub const ALL: [ZoneKind; 5] = [
        ZoneKind::Work,
        ZoneKind::Meet,
        ZoneKind::Rest,
        ZoneKind::Admin,
        ZoneKind::Walkway,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneKind::Work => "work",
            ZoneKind::Meet => "meet",
            ZoneKind::Rest => "rest",
            ZoneKind::Admin => "admin",
            ZoneKind::Walkway => "walkway",
        }
    }

    /// Carpet sprite laid under the zone
    pub fn floor_sprite(&self) -> &'static str {
        match self {
            ZoneKind::Work => "blue-carpet",
            ZoneKind::Meet => "gray-carpet",
            ZoneKind::Rest => "green-carpet",
            ZoneKind::Admin => "red-carpet",
            ZoneKind::Walkway => "wood-floor",
        }
    }

    pub fn is_walkway(&self) -> bool {
        matches!(self, ZoneKind::Walkway)
    }
}

impl fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed rectangular region of the office
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ZoneKind,
    pub rect: Rect,
}

impl Zone {
    pub fn new(id: impl Into<String>, kind: ZoneKind, rect: Rect) -> Self {
        Self {
            id: id.into(),
            kind,
            rect,
        }
    }
}

/// One generated desk and the seat that belongs to it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Workstation {
    pub index: usize,
    pub desk: GridPoint,
    pub seat: GridPoint,
}

/// Result of a layout pipeline: everything a renderer needs to draw the office
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfficePlan {
    pub grid: GridSpec,
    pub zones: Vec<Zone>,
    pub objects: Vec<SceneObject>,
    pub workstations: Vec<Workstation>,
    pub headcount: u32,
}

impl OfficePlan {
    /// Zones of one kind, in plan order
    pub fn zones_of(&self, kind: ZoneKind) -> impl Iterator<Item = &Zone> {
        self.zones.iter().filter(move |z| z.kind == kind)
    }

    pub fn has_zone(&self, kind: ZoneKind) -> bool {
        self.zones_of(kind).next().is_some()
    }

    /// Objects using a given sprite key
    pub fn objects_with_sprite<'a>(
        &'a self,
        sprite: &'a str,
    ) -> impl Iterator<Item = &'a SceneObject> + 'a {
        self.objects.iter().filter(move |o| o.sprite == sprite)
    }
}
