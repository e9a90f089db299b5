//! Presentation-facing state: one store plus the view parameters applied to it.

use serde::Serialize;

use stockpile_core::DomainResult;

use crate::config::InventoryConfig;
use crate::item::{DEFAULT_LOW_STOCK_THRESHOLD, DraftInput, Item, ItemDraft, ItemId};
use crate::seed;
use crate::store::ItemStore;
use crate::view::{CategoryFilter, SortDirection, ViewState};

/// One displayed row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryRow<'a> {
    pub item: &'a Item,
    pub low_stock: bool,
}

/// Explicitly owned inventory state driven by a single presentation surface.
///
/// The view state is consulted when rows are requested and is never written
/// back into the store.
#[derive(Debug, Clone)]
pub struct InventorySession {
    store: ItemStore,
    view: ViewState,
    low_stock_threshold: u32,
}

impl Default for InventorySession {
    fn default() -> Self {
        Self::new(seed::default_store())
    }
}

impl InventorySession {
    pub fn new(store: ItemStore) -> Self {
        Self {
            store,
            view: ViewState::default(),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }

    pub fn from_config(config: &InventoryConfig) -> Self {
        let store = if config.seed {
            seed::default_store()
        } else {
            ItemStore::new()
        };
        Self::new(store).with_low_stock_threshold(config.low_stock_threshold)
    }

    pub fn with_low_stock_threshold(mut self, threshold: u32) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.view.sort
    }

    pub fn category_filter(&self) -> &CategoryFilter {
        &self.view.filter
    }

    /// Save the entry form: add when `editing` is `None`, update otherwise.
    pub fn submit(&mut self, editing: Option<ItemId>, input: &DraftInput) -> DomainResult<Item> {
        let draft = input.parse()?;
        self.store.submit(editing, draft)
    }

    /// Typed variant of [`submit`](Self::submit) for callers that already hold a draft.
    pub fn submit_draft(&mut self, editing: Option<ItemId>, draft: ItemDraft) -> DomainResult<Item> {
        self.store.submit(editing, draft)
    }

    /// Form contents for editing `id`, if it exists.
    pub fn edit_form(&self, id: ItemId) -> Option<DraftInput> {
        self.store.get(id).map(DraftInput::from)
    }

    pub fn delete(&mut self, id: ItemId) {
        self.store.delete(id);
    }

    /// Select a category from the label shown in the filter list.
    pub fn select_category(&mut self, label: &str) {
        self.view.filter = CategoryFilter::parse(label);
        tracing::debug!(filter = %self.view.filter, "category filter changed");
    }

    pub fn toggle_sort(&mut self) -> SortDirection {
        let sort = self.view.toggle_sort();
        tracing::debug!(?sort, "sort direction changed");
        sort
    }

    pub fn categories(&self) -> Vec<String> {
        self.store.list_categories()
    }

    /// Rows for the current filter and sort.
    pub fn rows(&self) -> Vec<InventoryRow<'_>> {
        self.store
            .view(&self.view.filter, self.view.sort)
            .into_iter()
            .map(|item| InventoryRow {
                item,
                low_stock: item.is_low_stock(self.low_stock_threshold),
            })
            .collect()
    }

    /// Nothing matches the current filter ("No items found").
    pub fn is_empty_view(&self) -> bool {
        !self
            .store
            .items()
            .iter()
            .any(|item| self.view.filter.matches(item))
    }
}
