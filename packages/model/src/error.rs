use crate::ElementId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Element not found: {0}")]
    ElementNotFound(ElementId),

    #[error("Duplicate element id: {0}")]
    DuplicateId(ElementId),

    #[error("Unknown placeholder type: {0}")]
    UnknownElementType(String),

    #[error("Unknown card side: {0}")]
    UnknownSide(String),
}
