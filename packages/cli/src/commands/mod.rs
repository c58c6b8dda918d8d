pub mod check;
pub mod init;
pub mod render;

pub use check::{check, CheckArgs};
pub use init::{init, InitArgs};
pub use render::{render, RenderArgs};

use anyhow::{Context, Result};
use badgecraft_editor::{template, LoadedTemplate};
use badgecraft_model::DataRecord;
use std::path::Path;

pub const DATA_FILE_NAME: &str = "card-data.json";

pub(crate) fn read_template(path: &Path) -> Result<LoadedTemplate> {
    let json = std::fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))?;
    template::deserialize(&json).with_context(|| format!("Error loading template {}", path.display()))
}

pub(crate) fn read_record(path: &Path) -> Result<DataRecord> {
    let json = std::fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))?;
    DataRecord::from_json_str(&json).with_context(|| format!("Invalid data record {}", path.display()))
}
