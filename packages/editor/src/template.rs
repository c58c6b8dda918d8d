//! Card template files.
//!
//! A template is the placeholder collection plus, optionally, the record it
//! was designed against and the card format:
//!
//! ```json
//! {
//!   "placeholders": [ ... ],
//!   "dataRecord": { "name": "..." },
//!   "format": { "name": "A5 Landscape", "width": 210, "height": 148 }
//! }
//! ```
//!
//! Older files call the record `cardData`; both keys are read.

use badgecraft_model::{CardFormat, DataRecord, ElementId, Layout, PlaceholderElement};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

pub const TEMPLATE_FILE_NAME: &str = "card-template.json";

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Invalid template JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Template contains duplicate element id: {0}")]
    DuplicateId(ElementId),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDocument {
    /// Missing means an empty card
    #[serde(default)]
    pub placeholders: Vec<PlaceholderElement>,

    #[serde(default, alias = "cardData", skip_serializing_if = "Option::is_none")]
    pub data_record: Option<DataRecord>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<CardFormat>,
}

/// Parsed template ready to be adopted by a session
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedTemplate {
    pub placeholders: Vec<PlaceholderElement>,
    pub format: Option<CardFormat>,
    pub record: Option<DataRecord>,
}

/// A record that arrived with a template and should be relayed to whoever
/// owns the card data
#[derive(Debug, Clone, PartialEq)]
pub struct RecordUpdate {
    pub record: DataRecord,
}

/// Pretty-printed template JSON (2-space indentation)
pub fn serialize(layout: &Layout, record: &DataRecord) -> Result<String, TemplateError> {
    let document = TemplateDocument {
        placeholders: layout.placeholders.clone(),
        data_record: Some(record.clone()),
        format: Some(layout.format.clone()),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

pub fn deserialize(json: &str) -> Result<LoadedTemplate, TemplateError> {
    let document: TemplateDocument = serde_json::from_str(json)?;

    let mut seen = BTreeSet::new();
    for el in &document.placeholders {
        if !seen.insert(&el.id) {
            return Err(TemplateError::DuplicateId(el.id.clone()));
        }
    }

    Ok(LoadedTemplate {
        placeholders: document.placeholders,
        format: document.format,
        record: document.data_record,
    })
}
