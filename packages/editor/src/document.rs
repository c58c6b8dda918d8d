//! # Card Document
//!
//! The layout being edited together with the data record it is previewed
//! against.
//!
//! ## Lifecycle
//!
//! ```text
//! Template → Load → Edit → Render → Save
//!    ↓        ↓      ↓       ↓       ↓
//!  JSON    Layout Mutations Markup  JSON
//! ```

use crate::{EditorError, Mutation, MutationResult};
use badgecraft_model::{DataRecord, Layout, PlaceholderElement};
use tracing::debug;

/// Editable accreditation card
#[derive(Debug, Clone, Default)]
pub struct CardDocument {
    /// Current version number (increments on each applied change)
    pub version: u64,

    layout: Layout,
    record: DataRecord,
    dirty: bool,
}

impl CardDocument {
    pub fn new(layout: Layout, record: DataRecord) -> Self {
        Self {
            version: 0,
            layout,
            record,
            dirty: false,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn record(&self) -> &DataRecord {
        &self.record
    }

    /// Apply a mutation. The version only moves when the mutation succeeds.
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationResult, EditorError> {
        mutation.apply(&mut self.layout, &mut self.record)?;

        self.version += 1;
        self.dirty = true;
        debug!(mutation = mutation.name(), version = self.version, "Applied mutation");

        Ok(MutationResult {
            version: self.version,
        })
    }

    /// Swap in a whole placeholder collection (history restore, template load)
    pub fn restore_placeholders(&mut self, placeholders: Vec<PlaceholderElement>) -> MutationResult {
        self.layout.placeholders = placeholders;
        self.version += 1;
        self.dirty = true;

        MutationResult {
            version: self.version,
        }
    }

    /// Check if document has unsaved changes
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }
}
