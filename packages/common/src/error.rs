use thiserror::Error;

/// Errors raised while reading card data
#[derive(Error, Debug)]
pub enum CommonError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid structure: {0}")]
    InvalidStructure(String),
}

pub type CommonResult<T> = Result<T, CommonError>;
