//! Scheduled job handlers.

pub mod loans;
pub mod stock;

pub use loans::LoanScanHandler;
pub use stock::LowStockScanHandler;
