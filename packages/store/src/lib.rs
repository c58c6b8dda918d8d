//! # Badgecraft Store
//!
//! Persistence boundary for accreditation cards.
//!
//! A [`Card`] is a stored envelope around one [`DataRecord`], kept as JSON
//! text in `jsonTemplate`. Backends implement [`CardStore`];
//! [`MemoryCardStore`] is the in-process one used by tools and tests.
//!
//! Failures are handed back to the caller as [`StoreError`]. Nothing here
//! touches editor state, so a failed write leaves local edits in place.

mod card;
mod error;
mod memory;
mod records;

pub use card::Card;
pub use error::StoreError;
pub use memory::MemoryCardStore;
pub use records::{COPY_SUFFIX, default_record, default_record_at, duplicate_card, generate_card_id};

use badgecraft_model::DataRecord;

/// CRUD over stored cards, addressed by uuid
pub trait CardStore {
    /// Live cards in creation order
    fn list(&self) -> Result<Vec<Card>, StoreError>;

    fn get(&self, uuid: &str) -> Result<Card, StoreError>;

    fn create(&mut self, record: &DataRecord) -> Result<Card, StoreError>;

    fn update(&mut self, uuid: &str, record: &DataRecord) -> Result<Card, StoreError>;

    fn delete(&mut self, uuid: &str) -> Result<(), StoreError>;
}
