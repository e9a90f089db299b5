//! Canonical item list.

use std::collections::HashSet;

use stockpile_core::{DomainError, DomainResult, IdSequence};

use crate::item::{Item, ItemDraft, ItemId};
use crate::view::{self, CategoryFilter, SortDirection};

/// Owns the authoritative list of inventory items, in insertion order.
///
/// - Ids are unique and never reused: a monotonic sequence issues them
/// - `add`/`update` validate first and mutate nothing on failure
/// - `delete` of an unknown id is a no-op, not an error, unlike `update`
/// - `view` never reorders or drops items from the canonical list
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Vec<Item>,
    ids: IdSequence,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from explicit items (seed data).
    ///
    /// Rejects invalid items and duplicate ids. The id sequence continues
    /// after the highest seeded id.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> DomainResult<Self> {
        let mut store = Self::new();
        let mut seen = HashSet::new();

        for item in items {
            item.validate()?;
            if !seen.insert(item.id_typed()) {
                return Err(DomainError::invariant(format!(
                    "duplicate item id {}",
                    item.id_typed()
                )));
            }
            store.ids.observe(item.id_typed().0);
            store.items.push(item);
        }

        tracing::debug!(items = store.items.len(), "item store loaded");
        Ok(store)
    }

    /// Items already known to be valid, with distinct ids.
    pub(crate) fn from_trusted(items: Vec<Item>) -> Self {
        let mut ids = IdSequence::new();
        for item in &items {
            ids.observe(item.id_typed().0);
        }
        Self { items, ids }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id_typed() == id)
    }

    /// Append a new item with a freshly issued id.
    pub fn add(&mut self, draft: ItemDraft) -> DomainResult<Item> {
        draft.validate()?;

        let id = ItemId::new(self.ids.next_id()?);
        let item = Item::from_draft(id, draft);
        self.items.push(item.clone());

        tracing::info!(
            item_id = %id,
            category = item.category(),
            quantity = item.quantity(),
            "item added"
        );
        Ok(item)
    }

    /// Replace an item's fields in place, keeping its id and position.
    pub fn update(&mut self, id: ItemId, draft: ItemDraft) -> DomainResult<Item> {
        draft.validate()?;

        let item = self
            .items
            .iter_mut()
            .find(|item| item.id_typed() == id)
            .ok_or_else(DomainError::not_found)?;
        item.replace(draft);

        tracing::info!(
            item_id = %id,
            category = item.category(),
            quantity = item.quantity(),
            "item updated"
        );
        Ok(item.clone())
    }

    /// Remove the item with `id`, if present. Returns the remaining list.
    pub fn delete(&mut self, id: ItemId) -> &[Item] {
        let before = self.items.len();
        self.items.retain(|item| item.id_typed() != id);

        if self.items.len() < before {
            tracing::info!(item_id = %id, "item deleted");
        } else {
            tracing::debug!(item_id = %id, "delete of unknown item ignored");
        }
        &self.items
    }

    /// Add when `id` is `None`, update otherwise.
    pub fn submit(&mut self, id: Option<ItemId>, draft: ItemDraft) -> DomainResult<Item> {
        match id {
            Some(id) => self.update(id, draft),
            None => self.add(draft),
        }
    }

    /// `"All"` followed by each distinct category in first-seen order.
    pub fn list_categories(&self) -> Vec<String> {
        view::list_categories(&self.items)
    }

    /// The filtered and sorted items to display.
    pub fn view(&self, filter: &CategoryFilter, sort: SortDirection) -> Vec<&Item> {
        view::derive_view(&self.items, filter, sort)
    }
}
