//! Request DTOs with validation.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create user request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Username.
    #[validate(length(min = 3, max = 100))]
    pub username: String,
    /// Email.
    #[validate(email)]
    pub email: String,
    /// Password.
    #[validate(length(min = 8))]
    pub password: String,
    /// Role (`admin`, `manager`, or `user`).
    pub role: String,
}

/// Create category request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    /// URL-safe slug.
    #[validate(length(min = 1, max = 100))]
    pub slug: String,
    /// Display name; defaults to the formatted slug.
    pub name: Option<String>,
}

/// Create item request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateItemRequest {
    /// Item name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Category slug.
    #[validate(length(min = 1, max = 100))]
    pub category: String,
    /// Initial quantity.
    #[validate(range(min = 0))]
    pub quantity: i32,
    /// Reorder threshold.
    #[validate(range(min = 0))]
    pub min_quantity: i32,
    /// Unit price.
    #[serde(default)]
    pub price: Decimal,
}

/// Update item request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateItemRequest {
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

/// One line of a request being created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestItemInput {
    /// The requested item.
    pub item_id: i64,
    /// Quantity asked for.
    pub quantity: i32,
}

/// Create request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRequestRequest {
    /// Project the withdrawal is for.
    #[validate(length(min = 1, max = 255, message = "Project name is required"))]
    pub project_name: String,
    /// Requesting user.
    pub requester_id: Uuid,
    /// Why the items are needed.
    pub reason: Option<String>,
    /// Priority (`low`, `medium`, `high`).
    pub priority: String,
    /// Needed-by date.
    pub due_date: Option<DateTime<Utc>>,
    /// Requested lines.
    #[validate(length(min = 1, message = "At least one item is required"))]
    pub items: Vec<RequestItemInput>,
}

/// Status transition body for `PATCH /api/requests/{id}/status`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateRequestStatusRequest {
    /// Target status.
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
}

/// Borrow request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BorrowRequest {
    /// Borrowing user.
    pub user_id: Uuid,
    /// Item to borrow.
    pub item_id: i64,
    /// Quantity to borrow.
    #[validate(range(min = 1, message = "Quantity must be positive"))]
    pub quantity: i32,
    /// Due-back date.
    pub due_date: DateTime<Utc>,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// Return request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnRequest {
    /// Loan being returned.
    pub loan_id: Uuid,
    /// Free-form notes.
    pub notes: Option<String>,
}
