//! Category services.

pub mod service;

pub use service::CategoryService;
