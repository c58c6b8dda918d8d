use badgecraft_common::CommonError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Card not found: {0}")]
    NotFound(String),

    #[error("Malformed card template: {0}")]
    MalformedTemplate(#[from] CommonError),

    #[error("Could not encode card record: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Store backend error: {0}")]
    Backend(String),
}
