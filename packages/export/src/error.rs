use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Rasterisation failed: {0}")]
    Raster(String),

    #[error("PDF assembly failed: {0}")]
    Pdf(String),

    #[error("Nothing to export: {0}")]
    Empty(String),
}
