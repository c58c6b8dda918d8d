//! # Badgecraft Editor
//!
//! Editing engine for accreditation card layouts.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: formats, placeholders, layout        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: session + mutations                 │
//! │  - Pointer/keyboard gestures (snap, clamp)  │
//! │  - Alignment, z-order, copy                 │
//! │  - Snapshot undo/redo                       │
//! │  - Template load/save                       │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler-html: layout + record → markup/css │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use badgecraft_editor::{CardDocument, EditSession, RecordingSurface};
//!
//! let mut session = EditSession::new(CardDocument::new(layout, record), RecordingSurface::new());
//!
//! session.checkpoint();
//! let id = session.add_placeholder(ElementType::Text, 40.0, 40.0)?;
//! session.on_pointer_down(Point::new(45.0, 45.0), PointerTarget::Body(id), Modifiers::default());
//! session.on_pointer_move(Point::new(52.0, 45.0));
//! session.on_pointer_up(Point::new(52.0, 45.0));
//! session.checkpoint();
//!
//! let card = session.render();
//! let json = session.save_template()?;
//! ```

mod document;
mod errors;
mod geometry;
mod interaction;
mod mutations;
mod session;
mod surface;
pub mod template;
mod undo_stack;

pub use document::CardDocument;
pub use errors::EditorError;
pub use geometry::{
    align_rects, clamp_axis, drag_position, resize_size, snap_to_grid, Alignment, Point, Rect,
    DEFAULT_GRID_SIZE, MIN_ELEMENT_SIZE,
};
pub use interaction::{Action, InputState, Key, Modifiers, PointerTarget, NUDGE_STEP, NUDGE_STEP_LARGE};
pub use mutations::{Mutation, MutationError, MutationResult};
pub use session::{EditSession, Selection, SessionSettings, COPY_OFFSET};
pub use surface::{PresentationSurface, PrintJob, RecordingSurface, SurfaceError};
pub use template::{LoadedTemplate, RecordUpdate, TemplateDocument, TemplateError, TEMPLATE_FILE_NAME};
pub use undo_stack::{UndoStack, DEFAULT_MAX_LEVELS};

// Re-export common types for convenience
pub use badgecraft_compiler_html::RenderedCard;
pub use badgecraft_model::{CardFormat, DataRecord, ElementId, ElementType, Layout, PlaceholderElement, Side};
