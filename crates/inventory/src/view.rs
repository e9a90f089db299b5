//! Derived views over the canonical item list.
//!
//! Filtering and sorting only ever produce a new sequence of borrowed items;
//! the list they read from is left as it was.

use serde::{Deserialize, Serialize};

use crate::item::Item;

/// Label of the catch-all category filter.
pub const ALL_CATEGORIES: &str = "All";

/// Quantity sort order, cycled by repeated user action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    None,
    Ascending,
    Descending,
}

impl SortDirection {
    /// none → ascending → descending → none.
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::None => SortDirection::Ascending,
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::None,
        }
    }
}

/// Restricts a view to one category, or to none at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// `"All"` selects everything; any other label is an exact, case-sensitive match.
    pub fn parse(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(label.to_string())
        }
    }

    pub fn matches(&self, item: &Item) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(category) => item.category() == category,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Category(category) => category,
        }
    }
}

impl core::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// View parameters owned by the presentation side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub filter: CategoryFilter,
    pub sort: SortDirection,
}

impl ViewState {
    pub fn new(filter: CategoryFilter, sort: SortDirection) -> Self {
        Self { filter, sort }
    }

    /// Advance the sort toggle and return the new direction.
    pub fn toggle_sort(&mut self) -> SortDirection {
        self.sort = self.sort.toggle();
        self.sort
    }
}

/// Filter then sort `items` without touching them.
///
/// Sorting is stable: items with equal quantities keep their relative order.
pub fn derive_view<'a>(
    items: &'a [Item],
    filter: &CategoryFilter,
    sort: SortDirection,
) -> Vec<&'a Item> {
    let mut view: Vec<&Item> = items.iter().filter(|item| filter.matches(item)).collect();

    match sort {
        SortDirection::None => {}
        SortDirection::Ascending => view.sort_by_key(|item| item.quantity()),
        SortDirection::Descending => {
            view.sort_by(|a, b| b.quantity().cmp(&a.quantity()));
        }
    }

    view
}

/// `"All"` followed by each distinct category in first-seen order.
pub fn list_categories(items: &[Item]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for item in items {
        if !categories[1..].iter().any(|c| c == item.category()) {
            categories.push(item.category().to_string());
        }
    }
    categories
}
