//! Bounded linear undo/redo history

use std::collections::VecDeque;

use crate::scene::SceneObject;

use super::ObjectId;

/// Default number of records kept before the oldest is evicted
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// One mutating ledger operation, with enough state to reverse it
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryRecord {
    Added {
        id: ObjectId,
        object: SceneObject,
    },
    Moved {
        id: ObjectId,
        before: SceneObject,
        after: SceneObject,
    },
    Removed {
        id: ObjectId,
        object: SceneObject,
    },
}

impl HistoryRecord {
    pub fn id(&self) -> ObjectId {
        match self {
            HistoryRecord::Added { id, .. }
            | HistoryRecord::Moved { id, .. }
            | HistoryRecord::Removed { id, .. } => *id,
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            HistoryRecord::Added { .. } => "add",
            HistoryRecord::Moved { .. } => "move",
            HistoryRecord::Removed { .. } => "remove",
        }
    }
}

/// A stack of records with a cursor
///
/// `applied` counts the records currently in effect: records before it can
/// be undone, records from it onward can be redone.
#[derive(Debug, Clone)]
pub struct History {
    records: VecDeque<HistoryRecord>,
    applied: usize,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// History keeping at most `limit` records (at least one)
    pub fn with_limit(limit: usize) -> Self {
        Self {
            records: VecDeque::new(),
            applied: 0,
            limit: limit.max(1),
        }
    }

    /// Append a record, discarding any redo tail and evicting the oldest
    /// record once the limit is exceeded
    pub fn push(&mut self, record: HistoryRecord) {
        self.records.truncate(self.applied);
        self.records.push_back(record);
        if self.records.len() > self.limit {
            self.records.pop_front();
        }
        self.applied = self.records.len();
    }

    /// Step the cursor back, returning the record to reverse
    pub fn step_back(&mut self) -> Option<&HistoryRecord> {
        if self.applied == 0 {
            return None;
        }
        self.applied -= 1;
        self.records.get(self.applied)
    }

    /// Step the cursor forward, returning the record to re-apply
    pub fn step_forward(&mut self) -> Option<&HistoryRecord> {
        if self.applied >= self.records.len() {
            return None;
        }
        self.applied += 1;
        self.records.get(self.applied - 1)
    }

    pub fn can_undo(&self) -> bool {
        self.applied > 0
    }

    pub fn can_redo(&self) -> bool {
        self.applied < self.records.len()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.applied = 0;
    }
}
