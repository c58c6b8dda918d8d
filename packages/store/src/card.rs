use crate::StoreError;
use badgecraft_model::DataRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored accreditation card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub uuid: String,

    /// The card's data record as JSON text
    #[serde(rename = "jsonTemplate")]
    pub json_template: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Card {
    /// New unsaved card holding `record`
    pub fn new(uuid: impl Into<String>, record: &DataRecord) -> Result<Self, StoreError> {
        Ok(Self {
            id: None,
            uuid: uuid.into(),
            json_template: serde_json::to_string(record)?,
            created_at: None,
            updated_at: None,
            deleted_at: None,
        })
    }

    /// Parse `jsonTemplate` back into a record
    pub fn record(&self) -> Result<DataRecord, StoreError> {
        Ok(DataRecord::from_json_str(&self.json_template)?)
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
