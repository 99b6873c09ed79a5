//! # gudang-service
//!
//! Business logic service layer for Gudang Mitra. Each service
//! orchestrates repositories and credential verification to implement
//! application-level use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod category;
pub mod dashboard;
pub mod item;
pub mod loan;
pub mod notification;
pub mod request;
pub mod user;

pub use auth::AuthService;
pub use category::CategoryService;
pub use dashboard::DashboardService;
pub use item::ItemService;
pub use loan::LoanService;
pub use notification::NotificationService;
pub use request::RequestService;
pub use user::UserService;
