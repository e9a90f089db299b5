use serde::{Deserialize, Serialize};

use stockpile_core::{DomainError, DomainResult, Entity, SequenceId, ValueObject};

/// Categories offered by the entry form. The store accepts any non-empty category.
pub const PRESET_CATEGORIES: [&str; 4] = ["Electronics", "Clothing", "Food", "Other"];

/// Items below this quantity are flagged as low stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 10;

/// Inventory item identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub SequenceId);

impl ItemId {
    pub fn new(id: SequenceId) -> Self {
        Self(id)
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self(SequenceId::from_u64(value))
    }
}

impl core::str::FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<SequenceId>().map(Self)
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// One inventory record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    category: String,
    quantity: u32,
}

impl Item {
    /// Build an item from a validated draft.
    pub(crate) fn from_draft(id: ItemId, draft: ItemDraft) -> Self {
        Self {
            id,
            name: draft.name,
            category: draft.category,
            quantity: draft.quantity,
        }
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn is_low_stock(&self, threshold: u32) -> bool {
        self.quantity < threshold
    }

    /// Replace every field except the id.
    pub(crate) fn replace(&mut self, draft: ItemDraft) {
        self.name = draft.name;
        self.category = draft.category;
        self.quantity = draft.quantity;
    }

    pub(crate) fn validate(&self) -> DomainResult<()> {
        validate_label("name", &self.name)?;
        validate_label("category", &self.category)
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// The editable fields of an item, already typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub category: String,
    pub quantity: u32,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>, category: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            quantity,
        }
    }

    /// Presence checks; quantity is non-negative by construction.
    pub fn validate(&self) -> DomainResult<()> {
        validate_label("name", &self.name)?;
        validate_label("category", &self.category)
    }
}

impl ValueObject for ItemDraft {}

impl From<&Item> for ItemDraft {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            category: item.category.clone(),
            quantity: item.quantity,
        }
    }
}

/// Raw text fields as typed into the entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftInput {
    pub name: String,
    pub category: String,
    pub quantity: String,
}

impl DraftInput {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            quantity: quantity.into(),
        }
    }

    /// Turn form input into a typed draft.
    ///
    /// All three fields are required; the quantity must be a base-10
    /// non-negative integer.
    pub fn parse(&self) -> DomainResult<ItemDraft> {
        let quantity = self.quantity.trim();
        if quantity.is_empty() {
            return Err(DomainError::validation("quantity is required"));
        }
        if quantity.starts_with('-') {
            return Err(DomainError::validation("quantity cannot be negative"));
        }
        let quantity = quantity
            .parse::<u32>()
            .map_err(|e| DomainError::validation(format!("quantity is not a whole number: {e}")))?;

        let draft = ItemDraft {
            name: self.name.clone(),
            category: self.category.clone(),
            quantity,
        };
        draft.validate()?;
        Ok(draft)
    }
}

/// Pre-fills the edit form from an existing item.
impl From<&Item> for DraftInput {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            category: item.category.clone(),
            quantity: item.quantity.to_string(),
        }
    }
}

fn validate_label(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> Item {
        Item::from_draft(ItemId::from(1), ItemDraft::new("Laptop", "Electronics", 15))
    }

    #[test]
    fn parse_accepts_well_formed_input() {
        let draft = DraftInput::new("Keyboard", "Electronics", " 12 ").parse().unwrap();
        assert_eq!(draft, ItemDraft::new("Keyboard", "Electronics", 12));
    }

    #[test]
    fn parse_accepts_zero_quantity() {
        let draft = DraftInput::new("Socks", "Clothing", "0").parse().unwrap();
        assert_eq!(draft.quantity, 0);
    }

    #[test]
    fn parse_rejects_missing_fields() {
        for input in [
            DraftInput::new("", "Food", "3"),
            DraftInput::new("Apple", "  ", "3"),
            DraftInput::new("Apple", "Food", ""),
        ] {
            match input.parse().unwrap_err() {
                DomainError::Validation(_) => {}
                other => panic!("Expected Validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn parse_rejects_negative_and_non_numeric_quantity() {
        for quantity in ["-1", "abc", "1.5", "12abc"] {
            let err = DraftInput::new("Apple", "Food", quantity).parse().unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)), "{quantity}: {err:?}");
        }
    }

    #[test]
    fn draft_input_prefills_from_item() {
        let input = DraftInput::from(&laptop());
        assert_eq!(input, DraftInput::new("Laptop", "Electronics", "15"));
        assert_eq!(input.parse().unwrap(), ItemDraft::from(&laptop()));
    }

    #[test]
    fn low_stock_is_strictly_below_threshold() {
        let mut item = laptop();
        assert!(!item.is_low_stock(DEFAULT_LOW_STOCK_THRESHOLD));
        item.replace(ItemDraft::new("Laptop", "Electronics", 10));
        assert!(!item.is_low_stock(DEFAULT_LOW_STOCK_THRESHOLD));
        item.replace(ItemDraft::new("Laptop", "Electronics", 9));
        assert!(item.is_low_stock(DEFAULT_LOW_STOCK_THRESHOLD));
    }

    #[test]
    fn item_id_parses_from_text() {
        assert_eq!("7".parse::<ItemId>().unwrap(), ItemId::from(7));
        assert!(matches!("x".parse::<ItemId>(), Err(DomainError::InvalidId(_))));
    }

    #[test]
    fn item_serializes_with_flat_id() {
        let json = serde_json::to_value(laptop()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Laptop", "category": "Electronics", "quantity": 15})
        );
    }
}
