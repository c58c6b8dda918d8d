//! # Edit Session
//!
//! One user's editing state for one card: the document, what is selected,
//! the gesture in flight, history, id allocation and the surface used for
//! printing and notices.
//!
//! Pointer and keyboard handling lives in [`crate::interaction`].

use crate::geometry::Alignment;
use crate::interaction::InputState;
use crate::surface::PresentationSurface;
use crate::template::{self, RecordUpdate, TemplateError};
use crate::{CardDocument, EditorError, Mutation, MutationError, MutationResult, UndoStack};
use badgecraft_common::DEFAULT_LOCALE;
use badgecraft_compiler_html::{render, RenderOptions, RenderedCard};
use badgecraft_model::{
    CardFormat, DataRecord, ElementId, ElementType, IdGenerator, Layout, PlaceholderElement, Side,
    DEFAULT_CANVAS_SCALE,
};
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

/// Offset applied to a copied element
pub const COPY_OFFSET: f64 = 20.0;

/// Binding used for new placeholders when the record has no keys
const FALLBACK_DATA_KEY: &str = "name";

/// Primary selection plus the explicit multi-selection used for batch ops
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub primary: Option<ElementId>,
    pub multi: BTreeSet<ElementId>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.multi.is_empty()
    }

    pub fn contains(&self, id: &ElementId) -> bool {
        self.primary.as_ref() == Some(id) || self.multi.contains(id)
    }

    /// Elements a batch operation applies to: multi-selection ∪ primary
    pub fn batch(&self) -> Vec<ElementId> {
        let mut ids: Vec<ElementId> = self.multi.iter().cloned().collect();
        if let Some(primary) = &self.primary {
            if !self.multi.contains(primary) {
                ids.push(primary.clone());
            }
        }
        ids
    }

    pub fn clear(&mut self) {
        self.primary = None;
        self.multi.clear();
    }

    fn forget(&mut self, id: &ElementId) {
        if self.primary.as_ref() == Some(id) {
            self.primary = None;
        }
        self.multi.remove(id);
    }
}

/// Per-session knobs
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    /// Pixels per millimetre of the canvas
    pub canvas_scale: f64,
    /// Snap grid for gestures; `None` disables snapping
    pub grid_size: Option<f64>,
    /// Locale used for date placeholders
    pub locale: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            canvas_scale: DEFAULT_CANVAS_SCALE,
            grid_size: Some(crate::geometry::DEFAULT_GRID_SIZE),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

/// Single-user edit session
pub struct EditSession<S: PresentationSurface> {
    /// Document being edited
    pub document: CardDocument,

    /// Current selection
    pub selection: Selection,

    /// Gesture state machine
    pub input: InputState,

    pub settings: SessionSettings,

    history: UndoStack,
    ids: IdGenerator,
    surface: S,
}

impl<S: PresentationSurface> EditSession<S> {
    pub fn new(document: CardDocument, surface: S) -> Self {
        Self::with_settings(document, surface, SessionSettings::default())
    }

    pub fn with_settings(document: CardDocument, surface: S, settings: SessionSettings) -> Self {
        let ids = IdGenerator::resuming(document.layout());
        Self {
            document,
            selection: Selection::default(),
            input: InputState::Idle,
            settings,
            history: UndoStack::new(),
            ids,
            surface,
        }
    }

    pub fn layout(&self) -> &Layout {
        self.document.layout()
    }

    pub fn record(&self) -> &DataRecord {
        self.document.record()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Canvas size in pixels for the current format
    pub fn canvas_size(&self) -> (f64, f64) {
        self.layout().canvas_size(self.settings.canvas_scale)
    }

    pub(crate) fn apply(&mut self, mutation: Mutation) -> Result<MutationResult, EditorError> {
        self.document.apply(mutation)
    }

    // --- Layout CRUD ---

    /// Drop a new placeholder of `element_type` at (x, y) on the active side.
    /// It binds to the record's first key and becomes the selection.
    pub fn add_placeholder(
        &mut self,
        element_type: ElementType,
        x: f64,
        y: f64,
    ) -> Result<ElementId, EditorError> {
        let id = self.ids.next_id(element_type, self.document.layout());
        let data_key = self
            .record()
            .first_key()
            .unwrap_or(FALLBACK_DATA_KEY)
            .to_string();
        let element = PlaceholderElement::new(id.clone(), element_type, data_key, x, y)
            .with_side(self.layout().active_side);

        self.apply(Mutation::AddPlaceholder { element })?;
        self.select_element(&id)?;
        info!(id = %id, kind = %element_type, "Added placeholder");
        Ok(id)
    }

    /// Make `id` the primary selection
    pub fn select_element(&mut self, id: &ElementId) -> Result<(), EditorError> {
        if !self.layout().contains(id) {
            return Err(EditorError::ElementNotFound(id.clone()));
        }
        self.selection.primary = Some(id.clone());
        Ok(())
    }

    /// Add `id` to the multi-selection, or take it out if already there
    pub fn toggle_multi_select(&mut self, id: &ElementId) -> Result<(), EditorError> {
        if !self.layout().contains(id) {
            return Err(EditorError::ElementNotFound(id.clone()));
        }
        if !self.selection.multi.remove(id) {
            self.selection.multi.insert(id.clone());
        }
        Ok(())
    }

    pub fn deselect(&mut self) {
        self.selection.clear();
    }

    pub fn delete_element(&mut self, id: &ElementId) -> Result<(), EditorError> {
        self.apply(Mutation::RemoveElement { id: id.clone() })?;
        self.selection.forget(id);
        debug!(id = %id, "Deleted placeholder");
        Ok(())
    }

    /// Clone of the selected element for an inspector to edit
    pub fn selected_working_copy(&self) -> Option<PlaceholderElement> {
        self.selection
            .primary
            .as_ref()
            .and_then(|id| self.layout().get(id))
            .cloned()
    }

    /// Write an edited working copy back by identity
    pub fn update_element(&mut self, working_copy: PlaceholderElement) -> Result<(), EditorError> {
        self.apply(Mutation::ReplaceElement {
            element: working_copy,
        })?;
        Ok(())
    }

    pub fn current_side_elements(&self) -> Vec<&PlaceholderElement> {
        self.layout().current_side_elements()
    }

    /// Show the other face; the selection does not carry over
    pub fn switch_side(&mut self, side: Side) -> Result<(), EditorError> {
        self.cancel_gesture();
        self.apply(Mutation::SwitchSide { side })?;
        self.selection.clear();
        Ok(())
    }

    /// Change the card format and report which elements no longer fit
    pub fn set_format(&mut self, format: CardFormat) -> Result<Vec<ElementId>, EditorError> {
        self.apply(Mutation::SetFormat { format })?;
        let outside = self.out_of_bounds();
        if !outside.is_empty() {
            warn!(count = outside.len(), "Placeholders outside the card after format change");
        }
        Ok(outside)
    }

    pub fn out_of_bounds(&self) -> Vec<ElementId> {
        self.layout().out_of_bounds(self.settings.canvas_scale)
    }

    /// Bind a new data record
    pub fn set_record(&mut self, record: DataRecord) -> Result<(), EditorError> {
        self.apply(Mutation::SetRecord { record })?;
        Ok(())
    }

    /// Keys of the bound record, in document order
    pub fn available_keys(&self) -> Vec<String> {
        self.record().keys().map(str::to_string).collect()
    }

    // --- Geometry ---

    /// Duplicate an element 20px down and right; the copy becomes selected
    pub fn copy_element(&mut self, id: &ElementId) -> Result<ElementId, EditorError> {
        let source = self
            .layout()
            .get(id)
            .cloned()
            .ok_or_else(|| EditorError::ElementNotFound(id.clone()))?;

        let copy_id = self.ids.next_id(source.element_type, self.document.layout());
        let mut copy = source;
        copy.id = copy_id.clone();
        copy.x += COPY_OFFSET;
        copy.y += COPY_OFFSET;
        copy.label = format!("{} (Copy)", copy.label);

        self.apply(Mutation::AddPlaceholder { element: copy })?;
        self.selection.primary = Some(copy_id.clone());
        debug!(source = %id, copy = %copy_id, "Copied placeholder");
        Ok(copy_id)
    }

    /// Align the multi-selection together with the primary selection
    pub fn align(&mut self, alignment: Alignment) -> Result<(), EditorError> {
        let ids = self.selection.batch();
        if ids.len() < 2 {
            return Err(MutationError::AlignmentNeedsTwo(ids.len()).into());
        }
        self.apply(Mutation::Align { ids, alignment })?;
        Ok(())
    }

    pub fn bring_to_front(&mut self, id: &ElementId) -> Result<(), EditorError> {
        self.apply(Mutation::BringToFront { id: id.clone() })?;
        Ok(())
    }

    pub fn send_to_back(&mut self, id: &ElementId) -> Result<(), EditorError> {
        self.apply(Mutation::SendToBack { id: id.clone() })?;
        Ok(())
    }

    // --- History ---

    /// Snapshot the current placeholders onto the history
    pub fn checkpoint(&mut self) {
        self.history.checkpoint(&self.document.layout().placeholders);
        debug!(levels = self.history.len(), "Checkpoint");
    }

    /// Restore the previous checkpoint. Returns false when there is none.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.restore(snapshot);
                true
            }
            None => false,
        }
    }

    /// Re-apply the next checkpoint. Returns false when there is none.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.restore(snapshot);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &UndoStack {
        &self.history
    }

    fn restore(&mut self, placeholders: Vec<PlaceholderElement>) {
        self.cancel_gesture();
        self.document.restore_placeholders(placeholders);
        self.selection.clear();
    }

    // --- Output ---

    pub fn render(&self) -> RenderedCard {
        let options = RenderOptions {
            locale: self.settings.locale.clone(),
            ..RenderOptions::default()
        };
        render(self.layout(), self.record(), &options)
    }

    /// Render and hand the card to the print surface
    pub fn print(&mut self) -> Result<(), EditorError> {
        let card = self.render();
        if let Err(e) = self.surface.open_print_surface(&card.markup, &card.stylesheet) {
            warn!(error = %e, "Could not open print surface");
            self.surface
                .notify("Could not open the print window. Please allow pop-ups and try again.");
            return Err(e.into());
        }
        info!("Sent card to print surface");
        Ok(())
    }

    /// Template JSON for the current layout, format and record
    pub fn save_template(&mut self) -> Result<String, EditorError> {
        let json = template::serialize(self.layout(), self.record())?;
        self.document.mark_saved();
        Ok(json)
    }

    /// Replace the layout with a template.
    ///
    /// A template that does not parse is reported to the user and leaves
    /// the session as it was.
    pub fn load_template(&mut self, json: &str) -> Result<Option<RecordUpdate>, EditorError> {
        let loaded = match template::deserialize(json) {
            Ok(loaded) => loaded,
            Err(e) => {
                warn!(error = %e, "Rejected template");
                self.surface.notify(&template_notice(&e));
                return Err(e.into());
            }
        };

        self.cancel_gesture();
        let count = loaded.placeholders.len();
        self.document.restore_placeholders(loaded.placeholders);
        if let Some(format) = loaded.format {
            self.apply(Mutation::SetFormat { format })?;
        }

        let update = match loaded.record {
            Some(record) => {
                self.apply(Mutation::SetRecord {
                    record: record.clone(),
                })?;
                Some(RecordUpdate { record })
            }
            None => None,
        };

        self.ids.resume_after(self.document.layout());
        self.selection.clear();
        info!(placeholders = count, "Loaded template");
        Ok(update)
    }
}

fn template_notice(error: &TemplateError) -> String {
    format!("Error loading template: {}", error)
}
