use badgecraft_model::DataRecord;
use serde::{Deserialize, Serialize};

const FALLBACK_PART: &str = "card";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportKind {
    Png,
    Pdf,
    Html,
}

impl ExportKind {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportKind::Png => "png",
            ExportKind::Pdf => "pdf",
            ExportKind::Html => "html",
        }
    }
}

/// Characters that cannot appear in a file name on common file systems
const RESERVED: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// `{name}_{function}_card.{ext}`, whitespace runs collapsed to `_` and
/// path separators or reserved characters replaced by `_`
pub fn export_file_name(record: &DataRecord, kind: ExportKind) -> String {
    let name = record
        .get_str("name")
        .map(|name| sanitize(&name.split_whitespace().collect::<Vec<_>>().join("_")))
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| FALLBACK_PART.to_string());
    let function = record
        .get_str("function")
        .map(|function| sanitize(function.trim()))
        .filter(|function| !function.is_empty())
        .unwrap_or_else(|| FALLBACK_PART.to_string());

    format!("{}_{}_card.{}", name, function, kind.extension())
}

fn sanitize(part: &str) -> String {
    part.chars()
        .map(|c| if RESERVED.contains(&c) || c.is_control() { '_' } else { c })
        .collect()
}
