//! # Undo/Redo Stack
//!
//! Linear history of full placeholder-collection snapshots.
//!
//! ## Design
//!
//! - Snapshots are only taken on an explicit `checkpoint`
//! - A cursor points at the snapshot matching the live layout
//! - Checkpointing after an undo discards everything past the cursor
//! - The oldest snapshot is evicted once `max_levels` is exceeded
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut stack = UndoStack::new();
//!
//! stack.checkpoint(&layout.placeholders);
//! // ... move an element ...
//! stack.checkpoint(&layout.placeholders);
//!
//! if let Some(previous) = stack.undo() {
//!     layout.placeholders = previous;
//! }
//! ```

use badgecraft_model::PlaceholderElement;

pub const DEFAULT_MAX_LEVELS: usize = 50;

type Snapshot = Vec<PlaceholderElement>;

/// Undo/redo history for a card layout
#[derive(Debug, Clone)]
pub struct UndoStack {
    /// Snapshots, oldest first
    snapshots: Vec<Snapshot>,

    /// Index of the snapshot matching the live layout
    cursor: usize,

    /// Maximum number of retained snapshots (0 = unlimited)
    max_levels: usize,
}

impl UndoStack {
    /// Create a new undo stack holding up to 50 snapshots
    pub fn new() -> Self {
        Self::with_max_levels(DEFAULT_MAX_LEVELS)
    }

    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            snapshots: Vec::new(),
            cursor: 0,
            max_levels,
        }
    }

    /// Record a deep copy of `placeholders` as the newest state
    pub fn checkpoint(&mut self, placeholders: &[PlaceholderElement]) {
        if !self.snapshots.is_empty() {
            self.snapshots.truncate(self.cursor + 1);
        }
        self.snapshots.push(placeholders.to_vec());
        self.cursor = self.snapshots.len() - 1;

        if self.max_levels > 0 && self.snapshots.len() > self.max_levels {
            self.snapshots.remove(0);
            self.cursor -= 1;
        }
    }

    /// Step back; returns the snapshot to restore
    pub fn undo(&mut self) -> Option<Snapshot> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.snapshots.get(self.cursor).cloned()
    }

    /// Step forward; returns the snapshot to restore
    pub fn redo(&mut self) -> Option<Snapshot> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.snapshots.get(self.cursor).cloned()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Get the number of undo levels available
    pub fn undo_levels(&self) -> usize {
        self.cursor
    }

    /// Get the number of redo levels available
    pub fn redo_levels(&self) -> usize {
        self.snapshots.len().saturating_sub(self.cursor + 1)
    }

    /// Number of retained snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.cursor = 0;
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}
