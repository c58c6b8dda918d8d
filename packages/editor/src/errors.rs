//! Error types for the editor

use crate::mutations::MutationError;
use crate::surface::SurfaceError;
use crate::template::TemplateError;
use badgecraft_model::ElementId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Mutation error: {0}")]
    Mutation(#[from] MutationError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Surface error: {0}")]
    Surface(#[from] SurfaceError),

    #[error("Element not found: {0}")]
    ElementNotFound(ElementId),
}
