//! Scene objects and the JSON interchange format
//!
//! A scene is a flat list of [`SceneObject`]s. The sprite key of an object is
//! resolved to artwork by the renderer; the core only consults it to decide
//! whether the object claims its grid cell (see [`Occupancy`]).

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Schema version written into exported scenes
pub const SCENE_VERSION: &str = "1.0.0";

/// Broad category of a scene object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Furniture,
    Object,
    Floor,
}

impl ObjectKind {
    /// Occupancy used for sprites missing from the catalogue
    pub fn default_occupancy(&self) -> Occupancy {
        match self {
            ObjectKind::Furniture => Occupancy::Solid,
            ObjectKind::Object | ObjectKind::Floor => Occupancy::Companion,
        }
    }
}

/// Whether an object claims the grid cell it stands on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occupancy {
    /// Claims its cell; no other solid object may share it
    Solid,
    /// Sits on, beside or under a solid object and never claims a cell
    Companion,
}

/// Known sprite keys and their occupancy
const CATALOGUE: &[(&str, Occupancy)] = &[
    // furniture that blocks a cell
    ("desk", Occupancy::Solid),
    ("meeting-table", Occupancy::Solid),
    ("file-cabinet", Occupancy::Solid),
    ("filing-cabinet", Occupancy::Solid),
    ("bookshelf", Occupancy::Solid),
    ("water-dispenser", Occupancy::Solid),
    ("printer", Occupancy::Solid),
    ("sofa", Occupancy::Solid),
    ("break-room-table", Occupancy::Solid),
    // seating is tucked against desks and tables
    ("chair", Occupancy::Companion),
    ("object-monitor", Occupancy::Companion),
    ("object-keyboard", Occupancy::Companion),
    ("plant-small", Occupancy::Companion),
    ("plant-medium", Occupancy::Companion),
    ("plant-large", Occupancy::Companion),
    ("whiteboard", Occupancy::Companion),
    ("clock", Occupancy::Companion),
    ("coffee-machine", Occupancy::Companion),
    ("game-console", Occupancy::Companion),
    ("window", Occupancy::Companion),
    ("door", Occupancy::Companion),
    ("ceiling-lamp", Occupancy::Companion),
    ("floor-lamp", Occupancy::Companion),
    ("wall-poster", Occupancy::Companion),
    ("trash-bin", Occupancy::Companion),
    ("box", Occupancy::Companion),
    ("wood-floor", Occupancy::Companion),
    ("blue-carpet", Occupancy::Companion),
    ("gray-carpet", Occupancy::Companion),
    ("green-carpet", Occupancy::Companion),
    ("red-carpet", Occupancy::Companion),
];

/// Catalogue lookup for a sprite key
pub fn catalogue_occupancy(sprite: &str) -> Option<Occupancy> {
    CATALOGUE
        .iter()
        .find(|(key, _)| *key == sprite)
        .map(|(_, occupancy)| *occupancy)
}

/// The integer grid cell an object stands in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellKey {
    pub x: i64,
    pub y: i64,
}

impl CellKey {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Normalize a fractional grid position to the cell containing it
    pub fn from_position(x: f64, y: f64) -> Self {
        Self {
            x: x.floor() as i64,
            y: y.floor() as i64,
        }
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// A placed piece of furniture, decoration or floor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneObject {
    #[serde(rename = "type")]
    pub kind: ObjectKind,
    pub sprite: String,
    pub grid_x: f64,
    pub grid_y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_offset: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

impl SceneObject {
    pub fn new(kind: ObjectKind, sprite: impl Into<String>, grid_x: f64, grid_y: f64) -> Self {
        Self {
            kind,
            sprite: sprite.into(),
            grid_x,
            grid_y,
            z_offset: None,
            scale: None,
        }
    }

    pub fn furniture(sprite: impl Into<String>, grid_x: f64, grid_y: f64) -> Self {
        Self::new(ObjectKind::Furniture, sprite, grid_x, grid_y)
    }

    pub fn object(sprite: impl Into<String>, grid_x: f64, grid_y: f64) -> Self {
        Self::new(ObjectKind::Object, sprite, grid_x, grid_y)
    }

    pub fn floor(sprite: impl Into<String>, grid_x: f64, grid_y: f64) -> Self {
        Self::new(ObjectKind::Floor, sprite, grid_x, grid_y)
    }

    pub fn with_z_offset(mut self, z_offset: f64) -> Self {
        self.z_offset = Some(z_offset);
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Occupancy from the sprite catalogue, falling back to the object kind
    pub fn occupancy(&self) -> Occupancy {
        catalogue_occupancy(&self.sprite).unwrap_or_else(|| self.kind.default_occupancy())
    }

    pub fn is_solid(&self) -> bool {
        self.occupancy() == Occupancy::Solid
    }

    pub fn cell(&self) -> CellKey {
        CellKey::from_position(self.grid_x, self.grid_y)
    }
}

/// Errors raised when reading an exported scene
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("failed to parse scene JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid scene format: {0}")]
    InvalidFormat(String),
}

/// An exported scene document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedScene {
    pub name: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: u64,
    pub vps_count: u32,
    pub objects: Vec<SceneObject>,
    pub version: String,
}

impl SavedScene {
    pub fn new(name: impl Into<String>, objects: Vec<SceneObject>, vps_count: u32) -> Self {
        Self {
            name: name.into(),
            timestamp: now_millis(),
            vps_count,
            objects,
            version: SCENE_VERSION.to_string(),
        }
    }

    pub fn to_json(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Export objects as a pretty-printed scene document
pub fn export_json(
    name: impl Into<String>,
    objects: &[SceneObject],
    vps_count: u32,
) -> Result<String, SceneError> {
    SavedScene::new(name, objects.to_vec(), vps_count).to_json()
}

/// Read a scene document. The `objects` array is mandatory.
pub fn import_json(json: &str) -> Result<SavedScene, SceneError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    match value.get("objects") {
        Some(serde_json::Value::Array(_)) => {}
        Some(_) => return Err(SceneError::InvalidFormat("`objects` is not an array".into())),
        None => return Err(SceneError::InvalidFormat("missing `objects` array".into())),
    }
    Ok(serde_json::from_value(value)?)
}
