//! Loan policy configuration.

use serde::{Deserialize, Serialize};

/// Borrow/return policy settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanConfig {
    /// Minimum loan duration in days (due date must be at least this far out).
    #[serde(default = "default_min_duration_days")]
    pub min_duration_days: i64,
    /// Maximum loan duration in days.
    #[serde(default = "default_max_duration_days")]
    pub max_duration_days: i64,
    /// Hours before the due date at which a due-soon notification fires.
    #[serde(default = "default_due_soon_hours")]
    pub due_soon_hours: i64,
}

impl Default for LoanConfig {
    fn default() -> Self {
        Self {
            min_duration_days: default_min_duration_days(),
            max_duration_days: default_max_duration_days(),
            due_soon_hours: default_due_soon_hours(),
        }
    }
}

fn default_min_duration_days() -> i64 {
    1
}

fn default_max_duration_days() -> i64 {
    30
}

fn default_due_soon_hours() -> i64 {
    24
}
