//! Dashboard services.

pub mod service;

pub use service::DashboardService;
