//! Background worker configuration.

use serde::{Deserialize, Serialize};

/// Scheduled maintenance task settings.
///
/// Schedules use the 7-field cron syntax of `tokio-cron-scheduler`
/// (seconds first).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Whether the background worker runs at all.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Schedule for the overdue-loan scan.
    #[serde(default = "default_overdue_schedule")]
    pub overdue_scan_schedule: String,
    /// Schedule for the due-soon loan scan.
    #[serde(default = "default_due_soon_schedule")]
    pub due_soon_scan_schedule: String,
    /// Schedule for the low-stock scan.
    #[serde(default = "default_low_stock_schedule")]
    pub low_stock_scan_schedule: String,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            overdue_scan_schedule: default_overdue_schedule(),
            due_soon_scan_schedule: default_due_soon_schedule(),
            low_stock_scan_schedule: default_low_stock_schedule(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Every hour.
fn default_overdue_schedule() -> String {
    "0 0 * * * *".to_string()
}

/// Daily at 7 AM.
fn default_due_soon_schedule() -> String {
    "0 0 7 * * *".to_string()
}

/// Daily at 6 AM.
fn default_low_stock_schedule() -> String {
    "0 0 6 * * *".to_string()
}
