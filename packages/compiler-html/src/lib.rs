//! # Badgecraft HTML Compiler
//!
//! Turns a [`Layout`](badgecraft_model::Layout) plus a bound
//! [`DataRecord`](badgecraft_model::DataRecord) into a self-contained
//! markup + stylesheet pair.
//!
//! The same [`render`] output feeds the on-screen preview, the rasteriser
//! used for image/PDF export, and the print surface, so all three show the
//! same card.

mod codes;
mod compiler;


pub use codes::{barcode_svg, qr_svg};
pub use compiler::{
    effective_font_size, escape_html, function_color, render, render_face, resolve_text, CompileError,
    RenderOptions, RenderedCard, FALLBACK_FUNCTION_COLOR,
};
pub use badgecraft_compiler_css::compile_stylesheet;
