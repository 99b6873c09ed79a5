//! Dashboard aggregation.

use std::sync::Arc;

use gudang_core::error::AppError;
use gudang_database::repositories::dashboard::{DashboardCounts, DashboardRepository};

/// Read-only dashboard aggregates.
#[derive(Debug, Clone)]
pub struct DashboardService {
    /// Dashboard repository.
    dashboard_repo: Arc<DashboardRepository>,
}

impl DashboardService {
    /// Creates a new dashboard service.
    pub fn new(dashboard_repo: Arc<DashboardRepository>) -> Self {
        Self { dashboard_repo }
    }

    /// Gathers the dashboard counts.
    pub async fn stats(&self) -> Result<DashboardCounts, AppError> {
        self.dashboard_repo.counts().await
    }
}
