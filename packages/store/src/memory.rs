use crate::{Card, CardStore, StoreError};
use badgecraft_model::DataRecord;
use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

/// In-process card store
///
/// Deletes are soft: the card keeps its row with `deleted_at` set and drops
/// out of `list` and `get`.
#[derive(Debug, Default)]
pub struct MemoryCardStore {
    cards: Vec<Card>,
    next_id: i64,
}

impl MemoryCardStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn live_mut(&mut self, uuid: &str) -> Result<&mut Card, StoreError> {
        self.cards
            .iter_mut()
            .find(|card| card.uuid == uuid && !card.is_deleted())
            .ok_or_else(|| StoreError::NotFound(uuid.to_string()))
    }
}

impl CardStore for MemoryCardStore {
    fn list(&self) -> Result<Vec<Card>, StoreError> {
        Ok(self.cards.iter().filter(|card| !card.is_deleted()).cloned().collect())
    }

    fn get(&self, uuid: &str) -> Result<Card, StoreError> {
        self.cards
            .iter()
            .find(|card| card.uuid == uuid && !card.is_deleted())
            .cloned()
            .ok_or_else(|| StoreError::NotFound(uuid.to_string()))
    }

    fn create(&mut self, record: &DataRecord) -> Result<Card, StoreError> {
        self.next_id += 1;
        let now = Utc::now();

        let mut card = Card::new(Uuid::new_v4().to_string(), record)?;
        card.id = Some(self.next_id);
        card.created_at = Some(now);
        card.updated_at = Some(now);

        info!(uuid = %card.uuid, id = self.next_id, "Card created");
        self.cards.push(card.clone());
        Ok(card)
    }

    fn update(&mut self, uuid: &str, record: &DataRecord) -> Result<Card, StoreError> {
        let json_template = serde_json::to_string(record)?;
        let card = self.live_mut(uuid)?;
        card.json_template = json_template;
        card.updated_at = Some(Utc::now());

        debug!(uuid = %uuid, "Card updated");
        Ok(card.clone())
    }

    fn delete(&mut self, uuid: &str) -> Result<(), StoreError> {
        let card = self.live_mut(uuid)?;
        card.deleted_at = Some(Utc::now());

        info!(uuid = %uuid, "Card deleted");
        Ok(())
    }
}
