//! # Badgecraft Export
//!
//! Turns rendered cards into files: PNG images, PDF documents and
//! standalone print pages.
//!
//! Pixel work is pluggable. A host provides a [`Rasterizer`] (markup to
//! bitmap) and a [`PdfAssembler`] (bitmaps to PDF bytes); the [`Exporter`]
//! decides which faces become pages, how they are placed and what the
//! resulting file is called.

mod error;
mod exporter;
mod naming;
mod print;

pub use error::ExportError;
pub use exporter::{
    Bitmap, ExportArtifact, Exporter, PageSetup, PdfAssembler, PdfPage, Placement, Rasterizer,
    DEFAULT_RASTER_SCALE,
};
pub use naming::{export_file_name, ExportKind};
pub use print::{print_document, print_title};
