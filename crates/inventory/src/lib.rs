//! Inventory item tracking.
//!
//! This crate holds the item list, its validation rules and the derived
//! (filtered/sorted) views a presentation surface renders. It is pure
//! in-memory domain logic (no IO, no rendering, no persistence).

pub mod config;
pub mod item;
pub mod seed;
pub mod session;
pub mod store;
pub mod view;

pub use config::{ConfigError, InventoryConfig};
pub use item::{
    DEFAULT_LOW_STOCK_THRESHOLD, DraftInput, Item, ItemDraft, ItemId, PRESET_CATEGORIES,
};
pub use seed::SeedError;
pub use session::{InventoryRow, InventorySession};
pub use store::ItemStore;
pub use view::{ALL_CATEGORIES, CategoryFilter, SortDirection, ViewState};
