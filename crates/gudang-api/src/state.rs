//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use gudang_core::config::AppConfig;

use gudang_database::repositories::category::CategoryRepository;
use gudang_database::repositories::dashboard::DashboardRepository;
use gudang_database::repositories::item::ItemRepository;
use gudang_database::repositories::loan::LoanRepository;
use gudang_database::repositories::notification::NotificationRepository;
use gudang_database::repositories::request::RequestRepository;
use gudang_database::repositories::user::UserRepository;

use gudang_service::auth::AuthService;
use gudang_service::category::CategoryService;
use gudang_service::dashboard::DashboardService;
use gudang_service::item::ItemService;
use gudang_service::loan::LoanService;
use gudang_service::notification::NotificationService;
use gudang_service::request::RequestService;
use gudang_service::user::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    // ── Repositories ─────────────────────────────────────────
    /// User repository
    pub user_repo: Arc<UserRepository>,
    /// Category repository
    pub category_repo: Arc<CategoryRepository>,
    /// Item repository
    pub item_repo: Arc<ItemRepository>,
    /// Request repository
    pub request_repo: Arc<RequestRepository>,
    /// Loan repository
    pub loan_repo: Arc<LoanRepository>,
    /// Notification repository
    pub notification_repo: Arc<NotificationRepository>,
    /// Dashboard repository
    pub dashboard_repo: Arc<DashboardRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Auth service
    pub auth_service: Arc<AuthService>,
    /// User service
    pub user_service: Arc<UserService>,
    /// Category service
    pub category_service: Arc<CategoryService>,
    /// Item service
    pub item_service: Arc<ItemService>,
    /// Request service
    pub request_service: Arc<RequestService>,
    /// Loan service
    pub loan_service: Arc<LoanService>,
    /// Notification service
    pub notification_service: Arc<NotificationService>,
    /// Dashboard service
    pub dashboard_service: Arc<DashboardService>,
}
