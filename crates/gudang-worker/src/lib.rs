//! # gudang-worker
//!
//! Cron-scheduled maintenance tasks: overdue-loan reminders, due-soon
//! reminders, and low-stock alerts. Tasks run directly on their schedule
//! and write deduplicated notifications.

pub mod jobs;
pub mod scheduler;

pub use scheduler::MaintenanceScheduler;
