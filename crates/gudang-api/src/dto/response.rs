//! Response DTOs.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gudang_entity::category::display_name;
use gudang_entity::item::Item;
use gudang_entity::loan::Loan;
use gudang_entity::request::model::{Request, RequestItem, RequestWithItems};
use gudang_entity::user::User;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Count response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountResponse {
    /// Count value.
    pub count: i64,
}

/// User summary for responses. Never carries the stored credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Username.
    pub username: String,
    /// Email.
    pub email: String,
    /// Role.
    pub role: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Last login.
    pub last_login_at: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role.to_string(),
            created_at: user.created_at,
            last_login_at: user.last_login_at,
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The authenticated user.
    pub user: UserResponse,
}

/// Item representation with freshly derived status and availability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemResponse {
    /// Item ID.
    pub id: i64,
    /// Name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Category slug.
    pub category: String,
    /// Category display name (centralized formatting).
    pub category_name: String,
    /// On-hand quantity.
    pub quantity: i32,
    /// Reorder threshold.
    pub min_quantity: i32,
    /// Quantity out on loan.
    pub borrowed_quantity: i32,
    /// Quantity available to borrow.
    pub available: i32,
    /// Unit price.
    pub price: Decimal,
    /// Stock status, recomputed from the counters.
    pub status: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Updated at.
    pub updated_at: DateTime<Utc>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        // Responses carry the derived status, never the persisted column.
        let status = item.current_status().to_string();
        let available = item.available();
        Self {
            id: item.id,
            category_name: display_name(&item.category),
            name: item.name,
            description: item.description,
            category: item.category,
            quantity: item.quantity,
            min_quantity: item.min_quantity,
            borrowed_quantity: item.borrowed_quantity,
            available,
            price: item.price,
            status,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

/// Request line representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestItemResponse {
    /// Item ID.
    pub item_id: i64,
    /// Quantity asked for.
    pub quantity: i32,
}

impl From<RequestItem> for RequestItemResponse {
    fn from(line: RequestItem) -> Self {
        Self {
            item_id: line.item_id,
            quantity: line.quantity,
        }
    }
}

/// Request representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestResponse {
    /// Request ID.
    pub id: Uuid,
    /// Project name.
    pub project_name: String,
    /// Requesting user.
    pub requester_id: Uuid,
    /// Reason.
    pub reason: Option<String>,
    /// Priority.
    pub priority: String,
    /// Needed-by date.
    pub due_date: Option<DateTime<Utc>>,
    /// Lifecycle state.
    pub status: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Updated at.
    pub updated_at: DateTime<Utc>,
    /// Request lines (present on detail responses).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<RequestItemResponse>>,
}

impl From<Request> for RequestResponse {
    fn from(request: Request) -> Self {
        Self {
            id: request.id,
            project_name: request.project_name,
            requester_id: request.requester_id,
            reason: request.reason,
            priority: request.priority.to_string(),
            due_date: request.due_date,
            status: request.status.to_string(),
            created_at: request.created_at,
            updated_at: request.updated_at,
            items: None,
        }
    }
}

impl From<RequestWithItems> for RequestResponse {
    fn from(full: RequestWithItems) -> Self {
        let mut resp = Self::from(full.request);
        resp.items = Some(full.items.into_iter().map(Into::into).collect());
        resp
    }
}

/// Loan representation with the derived display status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanResponse {
    /// Loan ID.
    pub id: Uuid,
    /// Borrowing user.
    pub user_id: Uuid,
    /// Borrowed item.
    pub item_id: i64,
    /// Quantity borrowed.
    pub quantity: i32,
    /// Persisted state (`active` / `returned`).
    pub status: String,
    /// Display state (`active` / `overdue` / `returned`).
    pub display_status: String,
    /// Borrowed at.
    pub borrowed_date: DateTime<Utc>,
    /// Due back at.
    pub due_date: DateTime<Utc>,
    /// Returned at.
    pub returned_date: Option<DateTime<Utc>>,
    /// Notes.
    pub notes: Option<String>,
}

impl From<Loan> for LoanResponse {
    fn from(loan: Loan) -> Self {
        let display_status = loan.display_status_at(Utc::now()).to_string();
        Self {
            id: loan.id,
            user_id: loan.user_id,
            item_id: loan.item_id,
            quantity: loan.quantity,
            status: loan.status.to_string(),
            display_status,
            borrowed_date: loan.borrowed_date,
            due_date: loan.due_date,
            returned_date: loan.returned_date,
            notes: loan.notes,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// Detailed health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// Overall status.
    pub status: String,
    /// Database status.
    pub database: String,
    /// Version.
    pub version: String,
}
