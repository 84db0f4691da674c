//! Interactive placement editing
//!
//! The [`PlacementLedger`] owns a mutable scene: it assigns object ids,
//! tracks which cell each solid object claims, and records every change in a
//! bounded [`History`] so it can be undone and redone.

pub mod history;
pub mod ledger;

pub use history::{History, HistoryRecord, DEFAULT_HISTORY_LIMIT};
pub use ledger::{LoadReport, PlacementLedger};

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scene::CellKey;

/// Identifier assigned to an object by a ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "obj-{}", self.0)
    }
}

/// What the editor is currently doing with pointer input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    #[default]
    View,
    Edit,
    Place,
}

impl fmt::Display for EditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorMode::View => write!(f, "view"),
            EditorMode::Edit => write!(f, "edit"),
            EditorMode::Place => write!(f, "place"),
        }
    }
}

/// Errors returned by ledger mutations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// A solid object already claims the target cell
    #[error("cell {cell} is occupied by {by}")]
    Occupied { cell: CellKey, by: ObjectId },

    #[error("unknown object {0}")]
    UnknownObject(ObjectId),
}

impl PlacementError {
    pub fn occupied(cell: CellKey, by: ObjectId) -> Self {
        Self::Occupied { cell, by }
    }
}
