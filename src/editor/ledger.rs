//! The placement ledger
//!
//! Occupancy is keyed by the integer cell an object stands in. Only solid
//! objects claim a cell; companions (chairs, monitors, plants, floor tiles)
//! may share a cell with anything.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, warn};

use crate::scene::{CellKey, SceneObject};

use super::history::{History, HistoryRecord};
use super::{EditorMode, ObjectId, PlacementError};

/// Outcome of loading a scene into a ledger
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Ids assigned to the stored objects, in input order
    pub loaded: Vec<ObjectId>,
    /// Solid objects dropped because an earlier object claimed their cell
    pub rejected: Vec<SceneObject>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Mutable scene with collision tracking and undo/redo
#[derive(Debug, Clone, Default)]
pub struct PlacementLedger {
    objects: BTreeMap<ObjectId, SceneObject>,
    occupancy: HashMap<CellKey, ObjectId>,
    history: History,
    next_id: u64,
    mode: EditorMode,
    selected: Option<ObjectId>,
}

impl PlacementLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger whose history keeps at most `limit` records
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            history: History::with_limit(limit),
            ..Self::default()
        }
    }

    // --- mutations ---

    /// Place a new object and return its id
    pub fn add(&mut self, object: SceneObject) -> Result<ObjectId, PlacementError> {
        self.ensure_free(&object, None)?;
        let id = self.insert(object.clone());
        self.history.push(HistoryRecord::Added { id, object });
        Ok(id)
    }

    /// Move an object to a new grid position
    pub fn move_object(
        &mut self,
        id: ObjectId,
        grid_x: f64,
        grid_y: f64,
    ) -> Result<(), PlacementError> {
        let before = self
            .objects
            .get(&id)
            .cloned()
            .ok_or(PlacementError::UnknownObject(id))?;

        let mut after = before.clone();
        after.grid_x = grid_x;
        after.grid_y = grid_y;
        self.ensure_free(&after, Some(id))?;

        self.replace(id, after.clone());
        self.history.push(HistoryRecord::Moved { id, before, after });
        Ok(())
    }

    /// Delete an object, returning it
    pub fn remove(&mut self, id: ObjectId) -> Result<SceneObject, PlacementError> {
        let object = self.take(id).ok_or(PlacementError::UnknownObject(id))?;
        self.history.push(HistoryRecord::Removed {
            id,
            object: object.clone(),
        });
        Ok(object)
    }

    /// Reverse the most recent applied change
    pub fn undo(&mut self) -> Option<HistoryRecord> {
        let record = self.history.step_back()?.clone();
        match &record {
            HistoryRecord::Added { id, .. } => {
                self.take(*id);
            }
            HistoryRecord::Moved { id, before, .. } => self.replace(*id, before.clone()),
            HistoryRecord::Removed { id, object } => self.restore(*id, object.clone()),
        }
        debug!(action = record.action(), id = %record.id(), "undo");
        Some(record)
    }

    /// Re-apply the most recently undone change
    pub fn redo(&mut self) -> Option<HistoryRecord> {
        let record = self.history.step_forward()?.clone();
        match &record {
            HistoryRecord::Added { id, object } => self.restore(*id, object.clone()),
            HistoryRecord::Moved { id, after, .. } => self.replace(*id, after.clone()),
            HistoryRecord::Removed { id, .. } => {
                self.take(*id);
            }
        }
        debug!(action = record.action(), id = %record.id(), "redo");
        Some(record)
    }

    /// Replace the whole scene
    ///
    /// History and selection are cleared. Solid objects landing on a cell
    /// already claimed by an earlier object are rejected and reported.
    pub fn load(&mut self, objects: impl IntoIterator<Item = SceneObject>) -> LoadReport {
        self.objects.clear();
        self.occupancy.clear();
        self.history.clear();
        self.selected = None;

        let mut report = LoadReport::default();
        for object in objects {
            if self.ensure_free(&object, None).is_err() {
                warn!(
                    sprite = %object.sprite,
                    cell = %object.cell(),
                    "rejected colliding object on load"
                );
                report.rejected.push(object);
                continue;
            }
            report.loaded.push(self.insert(object));
        }
        debug!(
            loaded = report.loaded.len(),
            rejected = report.rejected.len(),
            "scene loaded"
        );
        report
    }

    /// Current objects in id order
    pub fn export(&self) -> Vec<SceneObject> {
        self.objects.values().cloned().collect()
    }

    // --- collision queries ---

    pub fn occupant(&self, cell: CellKey) -> Option<ObjectId> {
        self.occupancy.get(&cell).copied()
    }

    pub fn is_occupied(&self, cell: CellKey) -> bool {
        self.occupancy.contains_key(&cell)
    }

    /// Occupant of the cell containing a fractional grid position
    pub fn occupant_at(&self, grid_x: f64, grid_y: f64) -> Option<ObjectId> {
        self.occupant(CellKey::from_position(grid_x, grid_y))
    }

    /// Whether `add` would accept this object
    pub fn can_place(&self, object: &SceneObject) -> bool {
        self.ensure_free(object, None).is_ok()
    }

    // --- accessors ---

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> {
        self.objects.iter().map(|(id, object)| (*id, object))
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Switch modes. Leaving edit mode drops the selection.
    pub fn set_mode(&mut self, mode: EditorMode) {
        if self.mode == EditorMode::Edit && mode != EditorMode::Edit {
            self.selected = None;
        }
        self.mode = mode;
    }

    /// Select an object, or clear the selection with `None`
    pub fn select(&mut self, id: Option<ObjectId>) -> Result<(), PlacementError> {
        if let Some(id) = id {
            if !self.objects.contains_key(&id) {
                return Err(PlacementError::UnknownObject(id));
            }
        }
        self.selected = id;
        Ok(())
    }

    pub fn selected(&self) -> Option<ObjectId> {
        self.selected
    }

    // --- internals ---

    /// Fails when `object` is solid and its cell is claimed by someone other than `mover`
    fn ensure_free(
        &self,
        object: &SceneObject,
        mover: Option<ObjectId>,
    ) -> Result<(), PlacementError> {
        if !object.is_solid() {
            return Ok(());
        }
        let cell = object.cell();
        match self.occupancy.get(&cell) {
            Some(&owner) if Some(owner) != mover => Err(PlacementError::occupied(cell, owner)),
            _ => Ok(()),
        }
    }

    fn insert(&mut self, object: SceneObject) -> ObjectId {
        self.next_id += 1;
        let id = ObjectId(self.next_id);
        self.restore(id, object);
        id
    }

    /// Store an object under a known id, claiming its cell if solid
    fn restore(&mut self, id: ObjectId, object: SceneObject) {
        if object.is_solid() {
            self.occupancy.insert(object.cell(), id);
        }
        self.objects.insert(id, object);
    }

    fn take(&mut self, id: ObjectId) -> Option<SceneObject> {
        let object = self.objects.remove(&id)?;
        self.release(id, &object);
        if self.selected == Some(id) {
            self.selected = None;
        }
        Some(object)
    }

    fn replace(&mut self, id: ObjectId, object: SceneObject) {
        if let Some(old) = self.objects.get(&id).cloned() {
            self.release(id, &old);
        }
        self.restore(id, object);
    }

    /// Clear the cell claimed by `object`, but only if `id` still owns it
    fn release(&mut self, id: ObjectId, object: &SceneObject) {
        let cell = object.cell();
        if self.occupancy.get(&cell) == Some(&id) {
            self.occupancy.remove(&cell);
        }
    }
}
