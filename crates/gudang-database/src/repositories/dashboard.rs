//! Dashboard aggregate queries.

use sqlx::PgPool;

use gudang_core::result::AppResult;

use crate::connection::map_db_error;

/// Aggregate counts shown on the dashboard.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, sqlx::FromRow)]
pub struct DashboardCounts {
    /// Total items in the catalog.
    pub total_items: i64,
    /// Items at or below their reorder threshold (but not empty).
    pub low_stock_items: i64,
    /// Items with zero quantity.
    pub out_of_stock_items: i64,
    /// Requests awaiting a decision.
    pub pending_requests: i64,
    /// Requests approved so far.
    pub approved_requests: i64,
    /// Loans currently out.
    pub active_loans: i64,
    /// Active loans past their due date.
    pub overdue_loans: i64,
    /// Registered users.
    pub total_users: i64,
}

/// Repository for dashboard aggregates.
///
/// Stock statuses are computed from the counters in SQL, never read from
/// the stored status column.
#[derive(Debug, Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    /// Create a new dashboard repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gather all dashboard counts in one round trip.
    pub async fn counts(&self) -> AppResult<DashboardCounts> {
        sqlx::query_as::<_, DashboardCounts>(
            "SELECT \
                (SELECT COUNT(*) FROM items) AS total_items, \
                (SELECT COUNT(*) FROM items WHERE quantity > 0 AND quantity <= min_quantity) AS low_stock_items, \
                (SELECT COUNT(*) FROM items WHERE quantity <= 0) AS out_of_stock_items, \
                (SELECT COUNT(*) FROM requests WHERE status = 'pending') AS pending_requests, \
                (SELECT COUNT(*) FROM requests WHERE status = 'approved') AS approved_requests, \
                (SELECT COUNT(*) FROM loans WHERE status = 'active') AS active_loans, \
                (SELECT COUNT(*) FROM loans WHERE status = 'active' AND due_date < NOW()) AS overdue_loans, \
                (SELECT COUNT(*) FROM users) AS total_users",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error("Failed to gather dashboard counts", e))
    }
}
