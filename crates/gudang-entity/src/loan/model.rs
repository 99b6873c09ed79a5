//! Loan entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::LoanStatus;

/// A temporary, returnable withdrawal of an item's quantity.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Loan {
    /// Unique loan identifier.
    pub id: Uuid,
    /// The borrowing user.
    pub user_id: Uuid,
    /// The borrowed item.
    pub item_id: i64,
    /// Quantity borrowed (always positive).
    pub quantity: i32,
    /// Lifecycle state.
    pub status: LoanStatus,
    /// When the loan started.
    pub borrowed_date: DateTime<Utc>,
    /// When the loan is due back.
    pub due_date: DateTime<Utc>,
    /// When the loan was returned (if it has been).
    pub returned_date: Option<DateTime<Utc>>,
    /// Free-form notes.
    pub notes: Option<String>,
}

impl Loan {
    /// Whether this loan is overdue as of `now`.
    ///
    /// Derived, never persisted: an overdue loan is simply an active loan
    /// whose due date has passed.
    pub fn is_overdue_at(&self, now: DateTime<Utc>) -> bool {
        self.status == LoanStatus::Active && self.due_date < now
    }

    /// Whether this loan is overdue right now.
    pub fn is_overdue(&self) -> bool {
        self.is_overdue_at(Utc::now())
    }

    /// The label shown to users: `active`, `overdue`, or `returned`.
    pub fn display_status_at(&self, now: DateTime<Utc>) -> &'static str {
        if self.is_overdue_at(now) {
            "overdue"
        } else {
            self.status.as_str()
        }
    }
}

/// Data required to create a new loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLoan {
    /// Borrowing user.
    pub user_id: Uuid,
    /// Item to borrow.
    pub item_id: i64,
    /// Quantity to borrow.
    pub quantity: i32,
    /// Due-back date.
    pub due_date: DateTime<Utc>,
    /// Free-form notes.
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn loan(status: LoanStatus, due_in_hours: i64) -> Loan {
        let now = Utc::now();
        Loan {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            item_id: 1,
            quantity: 2,
            status,
            borrowed_date: now - Duration::days(3),
            due_date: now + Duration::hours(due_in_hours),
            returned_date: None,
            notes: None,
        }
    }

    #[test]
    fn test_overdue_derivation() {
        assert!(loan(LoanStatus::Active, -1).is_overdue());
        assert!(!loan(LoanStatus::Active, 1).is_overdue());
        // a returned loan is never overdue, however late it was
        assert!(!loan(LoanStatus::Returned, -48).is_overdue());
    }

    #[test]
    fn test_display_status() {
        let now = Utc::now();
        assert_eq!(loan(LoanStatus::Active, -1).display_status_at(now), "overdue");
        assert_eq!(loan(LoanStatus::Active, 1).display_status_at(now), "active");
        assert_eq!(
            loan(LoanStatus::Returned, -1).display_status_at(now),
            "returned"
        );
    }
}
