//! # Badgecraft Model
//!
//! In-memory representation of an accreditation card layout.
//!
//! A [`Layout`] is an ordered set of [`PlaceholderElement`]s (draw order:
//! first is painted first) spread over two faces, plus the physical
//! [`CardFormat`] they are laid out on. Placeholders bind to fields of an
//! external [`DataRecord`] through their `dataKey`.
//!
//! Coordinates are pixels in canvas space. The canvas of a face is the card
//! format in millimetres multiplied by a canvas scale (pixels per
//! millimetre, [`DEFAULT_CANVAS_SCALE`] by default).

mod card_format;
mod defaults;
mod element;
mod error;
mod id_generator;
mod layout;
mod record;

pub use card_format::{CardFormat, Orientation, DEFAULT_CANVAS_SCALE};
pub use defaults::default_placeholders;
pub use element::{
    ElementId, ElementType, FontWeight, PlaceholderElement, Side, TextAlign, DEFAULT_FONT_SIZE,
};
pub use error::ModelError;
pub use id_generator::{IdGenerator, MAX_RESUMED_SUFFIX};
pub use layout::Layout;
pub use record::DataRecord;

pub use badgecraft_common::TruncateMode;
