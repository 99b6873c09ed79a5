//! Loan services.

pub mod service;

pub use service::LoanService;
