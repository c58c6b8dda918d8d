//! Record helpers for new and duplicated cards

use crate::{Card, CardStore, StoreError};
use badgecraft_model::DataRecord;
use chrono::{DateTime, Utc};
use serde_json::json;
use tracing::info;

pub const COPY_SUFFIX: &str = " (Copy)";

/// `CARD-` followed by the last six digits of the millisecond timestamp
pub fn generate_card_id(now: DateTime<Utc>) -> String {
    let millis = now.timestamp_millis().rem_euclid(1_000_000);
    format!("CARD-{millis:06}")
}

pub fn default_record() -> DataRecord {
    default_record_at(Utc::now())
}

/// Record a brand new card starts from
pub fn default_record_at(now: DateTime<Utc>) -> DataRecord {
    let mut record = DataRecord::new();
    record.insert("name", json!("New Card"));
    for key in ["rank", "country_code", "country", "role", "discipline", "subdiscipline", "accreditation"] {
        record.insert(key, json!(""));
    }
    record.insert("function", json!("athlete"));
    record.insert("zones", json!([]));
    record.insert("cardId", json!(generate_card_id(now)));
    for key in ["imageUrl", "qr_sbb", "qr_event", "eventImageUrl"] {
        record.insert(key, json!(""));
    }
    record.insert(
        "availableZones",
        json!(["LU", "1", "2", "3", "4", "5", "6", "7", "8", "VIP", "MEDIA"]),
    );
    record.insert("transportOptions", json!(["Bus", "Shuttle", "Private"]));
    record.insert("mealCategories", json!(["Breakfast", "Lunch", "Dinner"]));
    record
}

/// Store a copy of `card` under a new identity with a fresh `cardId`
pub fn duplicate_card<S: CardStore + ?Sized>(store: &mut S, card: &Card) -> Result<Card, StoreError> {
    let mut record = card.record()?;

    let name = record.get_str("name").unwrap_or_default();
    let name = format!("{name}{COPY_SUFFIX}").trim_start().to_string();
    record.insert("name", json!(name));
    record.insert("cardId", json!(generate_card_id(Utc::now())));

    let copy = store.create(&record)?;
    info!(from = %card.uuid, to = %copy.uuid, "Card duplicated");
    Ok(copy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryCardStore;
    use chrono::TimeZone;

    #[test]
    fn test_card_id_uses_last_six_digits() {
        let now = Utc.timestamp_millis_opt(1_709_632_800_123).unwrap();
        assert_eq!(generate_card_id(now), "CARD-800123");

        let early = Utc.timestamp_millis_opt(42).unwrap();
        assert_eq!(generate_card_id(early), "CARD-000042");
    }

    #[test]
    fn test_default_record() {
        let now = Utc.timestamp_millis_opt(1_709_632_800_123).unwrap();
        let record = default_record_at(now);

        assert_eq!(record.get_str("name"), Some("New Card"));
        assert_eq!(record.get_str("function"), Some("athlete"));
        assert_eq!(record.get_str("cardId"), Some("CARD-800123"));
        assert_eq!(record.get_str("country_code"), Some(""));
        assert_eq!(record.get("zones"), Some(&json!([])));
        assert_eq!(record.get("availableZones").and_then(|v| v.as_array()).map(Vec::len), Some(11));
        assert_eq!(record.first_key(), Some("name"));
    }

    #[test]
    fn test_duplicate_card() {
        let mut store = MemoryCardStore::new();
        let mut record = default_record();
        record.insert("name", json!("RUETHEMANN, Christoph"));
        record.insert("cardId", json!("CARD-ORIGINAL"));
        let original = store.create(&record).unwrap();

        let copy = duplicate_card(&mut store, &original).unwrap();
        let copied = copy.record().unwrap();

        assert_ne!(copy.uuid, original.uuid);
        assert_eq!(copied.get_str("name"), Some("RUETHEMANN, Christoph (Copy)"));
        assert!(copied.get_str("cardId").unwrap().starts_with("CARD-"));
        assert_ne!(copied.get_str("cardId"), Some("CARD-ORIGINAL"));
        assert_eq!(copied.get_str("function"), Some("athlete"));
        assert_eq!(store.list().unwrap().len(), 2);
    }

    #[test]
    fn test_duplicate_rejects_malformed_template() {
        let mut store = MemoryCardStore::new();
        let mut broken = store.create(&default_record()).unwrap();
        broken.json_template = "[1, 2".to_string();

        let err = duplicate_card(&mut store, &broken).unwrap_err();
        assert!(matches!(err, StoreError::MalformedTemplate(_)));
        assert_eq!(store.list().unwrap().len(), 1);
    }
}
