//! Notification event types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle events that produce a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_event", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NotificationEvent {
    /// A request was approved.
    RequestApproved,
    /// A request was rejected.
    RequestRejected,
    /// A request was fulfilled.
    RequestFulfilled,
    /// A request was marked out of stock.
    RequestOutOfStock,
    /// A loan is due within the configured window.
    LoanDueSoon,
    /// A loan is past its due date.
    LoanOverdue,
    /// An item fell to or below its reorder threshold.
    ItemLowStock,
    /// An item ran out entirely.
    ItemOutOfStock,
}

impl NotificationEvent {
    /// Return the event as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RequestApproved => "request_approved",
            Self::RequestRejected => "request_rejected",
            Self::RequestFulfilled => "request_fulfilled",
            Self::RequestOutOfStock => "request_out_of_stock",
            Self::LoanDueSoon => "loan_due_soon",
            Self::LoanOverdue => "loan_overdue",
            Self::ItemLowStock => "item_low_stock",
            Self::ItemOutOfStock => "item_out_of_stock",
        }
    }
}

impl fmt::Display for NotificationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
