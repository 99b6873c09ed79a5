//! Request and request-item entity models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::priority::RequestPriority;
use super::status::RequestStatus;

/// A user's ask to withdraw quantities of one or more items for a project.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Request {
    /// Unique request identifier.
    pub id: Uuid,
    /// Project the withdrawal is for.
    pub project_name: String,
    /// The requesting user.
    pub requester_id: Uuid,
    /// Why the items are needed.
    pub reason: Option<String>,
    /// Request priority.
    pub priority: RequestPriority,
    /// When the items are needed by.
    pub due_date: Option<DateTime<Utc>>,
    /// Lifecycle state.
    pub status: RequestStatus,
    /// When the request was created.
    pub created_at: DateTime<Utc>,
    /// When the request was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A line of a request: one item and the quantity asked for.
///
/// Created atomically with its parent request and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RequestItem {
    /// The owning request.
    pub request_id: Uuid,
    /// The requested item.
    pub item_id: i64,
    /// Quantity asked for (always positive).
    pub quantity: i32,
}

/// A request together with its lines, as returned by read endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestWithItems {
    /// The request row.
    #[serde(flatten)]
    pub request: Request,
    /// The request's lines.
    pub items: Vec<RequestItem>,
}

/// Data required to create a new request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRequest {
    /// Project name.
    pub project_name: String,
    /// Requesting user.
    pub requester_id: Uuid,
    /// Reason for the request.
    pub reason: Option<String>,
    /// Priority.
    pub priority: RequestPriority,
    /// Needed-by date.
    pub due_date: Option<DateTime<Utc>>,
    /// Requested lines (item + quantity).
    pub items: Vec<CreateRequestItem>,
}

/// One line of a request being created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRequestItem {
    /// The requested item.
    pub item_id: i64,
    /// Quantity asked for.
    pub quantity: i32,
}
