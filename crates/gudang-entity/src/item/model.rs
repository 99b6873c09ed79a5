//! Item entity model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::status::ItemStatus;

/// A warehouse stock-keeping unit.
///
/// `quantity` is the canonical on-hand count; `borrowed_quantity` tracks
/// how much of it is currently out on loan. Both are kept non-negative by
/// database CHECK constraints.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Item {
    /// Unique item identifier.
    pub id: i64,
    /// Item name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Category slug (free text, not a foreign key).
    pub category: String,
    /// On-hand quantity.
    pub quantity: i32,
    /// Reorder threshold.
    pub min_quantity: i32,
    /// Quantity currently out on loan.
    pub borrowed_quantity: i32,
    /// Unit price.
    pub price: Decimal,
    /// Persisted stock status. Kept in sync on every write but always
    /// recomputable; use [`Item::current_status`] when reading.
    pub status: ItemStatus,
    /// When the item was created.
    pub created_at: DateTime<Utc>,
    /// When the item was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Freshly derived status from the current counters.
    ///
    /// The persisted `status` column is never trusted over this.
    pub fn current_status(&self) -> ItemStatus {
        ItemStatus::derive(self.quantity, self.min_quantity)
    }

    /// Quantity available to borrow right now.
    pub fn available(&self) -> i32 {
        (self.quantity - self.borrowed_quantity).max(0)
    }
}

/// Data required to create a new item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateItem {
    /// Item name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Category slug.
    pub category: String,
    /// Initial quantity.
    pub quantity: i32,
    /// Reorder threshold.
    pub min_quantity: i32,
    /// Unit price.
    pub price: Decimal,
}

/// Data for updating an existing item's catalog fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateItem {
    /// The item ID to update.
    pub id: i64,
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New category slug.
    pub category: Option<String>,
    /// New on-hand quantity.
    pub quantity: Option<i32>,
    /// New reorder threshold.
    pub min_quantity: Option<i32>,
    /// New unit price.
    pub price: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: i32, min_quantity: i32, borrowed: i32) -> Item {
        Item {
            id: 1,
            name: "Drill".to_string(),
            description: None,
            category: "tools".to_string(),
            quantity,
            min_quantity,
            borrowed_quantity: borrowed,
            price: Decimal::new(12_50, 2),
            status: ItemStatus::derive(quantity, min_quantity),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_available() {
        assert_eq!(item(10, 3, 4).available(), 6);
        assert_eq!(item(3, 3, 3).available(), 0);
        // availability never goes negative even if counters drift
        assert_eq!(item(2, 0, 5).available(), 0);
    }

    #[test]
    fn test_current_status_ignores_persisted_value() {
        let mut it = item(10, 3, 0);
        it.status = ItemStatus::OutOfStock; // stale persisted value
        assert_eq!(it.current_status(), ItemStatus::InStock);
    }
}
