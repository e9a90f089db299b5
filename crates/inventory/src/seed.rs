//! Initial store contents.

use serde::Deserialize;
use thiserror::Error;

use stockpile_core::DomainError;

use crate::item::{Item, ItemDraft, ItemId};
use crate::store::ItemStore;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to parse seed document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid seed item: {0}")]
    Invalid(#[from] DomainError),
}

#[derive(Debug, Deserialize)]
struct SeedRecord {
    id: u64,
    name: String,
    category: String,
    quantity: u32,
}

impl From<SeedRecord> for Item {
    fn from(record: SeedRecord) -> Self {
        Item::from_draft(
            ItemId::from(record.id),
            ItemDraft::new(record.name, record.category, record.quantity),
        )
    }
}

/// The fixed example list a new session starts from.
pub fn default_items() -> Vec<Item> {
    [
        (1, "Laptop", "Electronics", 15),
        (2, "Mouse", "Electronics", 8),
        (3, "T-Shirt", "Clothing", 20),
        (4, "Banana", "Food", 5),
    ]
    .into_iter()
    .map(|(id, name, category, quantity)| {
        Item::from_draft(ItemId::from(id), ItemDraft::new(name, category, quantity))
    })
    .collect()
}

/// Store holding [`default_items`].
pub fn default_store() -> ItemStore {
    ItemStore::from_trusted(default_items())
}

/// Parse a JSON array of `{id, name, category, quantity}` records into a store.
pub fn from_json(json: &str) -> Result<ItemStore, SeedError> {
    let records: Vec<SeedRecord> = serde_json::from_str(json)?;
    let store = ItemStore::from_items(records.into_iter().map(Item::from))?;
    tracing::info!(items = store.len(), "seed document loaded");
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockpile_core::Entity;

    #[test]
    fn default_store_has_four_items_with_ids_one_to_four() {
        let store = default_store();
        let ids: Vec<u64> = store.items().iter().map(|i| i.id().0.as_u64()).collect();
        assert_eq!(ids, [1, 2, 3, 4]);
    }

    #[test]
    fn json_seed_loads_and_continues_id_sequence() {
        let mut store = from_json(
            r#"[
                {"id": 10, "name": "Drill", "category": "Tools", "quantity": 2},
                {"id": 3, "name": "Saw", "category": "Tools", "quantity": 11}
            ]"#,
        )
        .unwrap();

        assert_eq!(store.len(), 2);
        let added = store.add(ItemDraft::new("Hammer", "Tools", 4)).unwrap();
        assert_eq!(added.id_typed(), ItemId::from(11));
    }

    #[test]
    fn json_seed_rejects_negative_quantity() {
        let err = from_json(r#"[{"id": 1, "name": "A", "category": "B", "quantity": -1}]"#)
            .unwrap_err();
        assert!(matches!(err, SeedError::Parse(_)));
    }

    #[test]
    fn json_seed_rejects_blank_name_and_duplicate_ids() {
        let blank = from_json(r#"[{"id": 1, "name": " ", "category": "B", "quantity": 1}]"#);
        assert!(matches!(blank, Err(SeedError::Invalid(DomainError::Validation(_)))));

        let duplicate = from_json(
            r#"[
                {"id": 1, "name": "A", "category": "B", "quantity": 1},
                {"id": 1, "name": "C", "category": "D", "quantity": 2}
            ]"#,
        );
        assert!(matches!(
            duplicate,
            Err(SeedError::Invalid(DomainError::InvariantViolation(_)))
        ));
    }
}
