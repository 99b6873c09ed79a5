//! Derived item stock status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stock status of an item, derived from its quantity and reorder threshold.
///
/// The stored column exists for SQL-side filtering only; whenever a fresh
/// computation is possible it wins over the persisted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "item_status", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ItemStatus {
    /// Quantity is above the reorder threshold.
    InStock,
    /// Quantity is at or below the reorder threshold, but not zero.
    LowStock,
    /// Quantity is zero.
    OutOfStock,
}

impl ItemStatus {
    /// Derive the status from a quantity and reorder threshold.
    ///
    /// This is the single source of truth for status computation; it is
    /// applied on every stock write and re-applied on read.
    pub fn derive(quantity: i32, min_quantity: i32) -> Self {
        if quantity <= 0 {
            Self::OutOfStock
        } else if quantity <= min_quantity {
            Self::LowStock
        } else {
            Self::InStock
        }
    }

    /// Return the status as a kebab-case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InStock => "in-stock",
            Self::LowStock => "low-stock",
            Self::OutOfStock => "out-of-stock",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ItemStatus {
    type Err = gudang_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "in-stock" => Ok(Self::InStock),
            "low-stock" => Ok(Self::LowStock),
            "out-of-stock" => Ok(Self::OutOfStock),
            _ => Err(gudang_core::AppError::validation(format!(
                "Invalid item status: '{s}'. Expected one of: in-stock, low-stock, out-of-stock"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_boundaries() {
        assert_eq!(ItemStatus::derive(0, 3), ItemStatus::OutOfStock);
        assert_eq!(ItemStatus::derive(3, 3), ItemStatus::LowStock);
        assert_eq!(ItemStatus::derive(4, 3), ItemStatus::InStock);
        // min_quantity of zero: any positive quantity is in stock
        assert_eq!(ItemStatus::derive(1, 0), ItemStatus::InStock);
        assert_eq!(ItemStatus::derive(0, 0), ItemStatus::OutOfStock);
    }

    #[test]
    fn test_derive_after_full_deduction() {
        // 5 on hand, 5 requested, threshold 5: quantity reaches zero
        assert_eq!(ItemStatus::derive(5 - 5, 5), ItemStatus::OutOfStock);
        // 10 on hand, 4 requested, threshold 3: still in stock
        assert_eq!(ItemStatus::derive(10 - 4, 3), ItemStatus::InStock);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "low-stock".parse::<ItemStatus>().unwrap(),
            ItemStatus::LowStock
        );
        assert!("backordered".parse::<ItemStatus>().is_err());
    }
}
