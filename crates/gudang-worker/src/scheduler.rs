//! Cron scheduler for periodic maintenance tasks.

use std::sync::Arc;

use tokio_cron_scheduler::{Job as CronJob, JobScheduler};
use tracing;

use gudang_core::config::worker::WorkerConfig;
use gudang_core::error::AppError;

use crate::jobs::loans::LoanScanHandler;
use crate::jobs::stock::LowStockScanHandler;

/// Cron-based scheduler for periodic background tasks
pub struct MaintenanceScheduler {
    /// The underlying job scheduler
    scheduler: JobScheduler,
    /// Worker settings (schedules)
    config: WorkerConfig,
    /// Loan scan handler
    loan_scan: Arc<LoanScanHandler>,
    /// Low-stock scan handler
    low_stock_scan: Arc<LowStockScanHandler>,
}

impl std::fmt::Debug for MaintenanceScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaintenanceScheduler").finish()
    }
}

impl MaintenanceScheduler {
    /// Create a new maintenance scheduler
    pub async fn new(
        config: WorkerConfig,
        loan_scan: Arc<LoanScanHandler>,
        low_stock_scan: Arc<LowStockScanHandler>,
    ) -> Result<Self, AppError> {
        let scheduler = JobScheduler::new()
            .await
            .map_err(|e| AppError::internal(format!("Failed to create scheduler: {e}")))?;

        Ok(Self {
            scheduler,
            config,
            loan_scan,
            low_stock_scan,
        })
    }

    /// Register all default scheduled tasks
    pub async fn register_default_tasks(&self) -> Result<(), AppError> {
        self.register_overdue_scan().await?;
        self.register_due_soon_scan().await?;
        self.register_low_stock_scan().await?;

        tracing::info!("All scheduled tasks registered");
        Ok(())
    }

    /// Start the scheduler
    pub async fn start(&self) -> Result<(), AppError> {
        self.scheduler
            .start()
            .await
            .map_err(|e| AppError::internal(format!("Failed to start scheduler: {e}")))?;

        tracing::info!("Maintenance scheduler started");
        Ok(())
    }

    /// Shutdown the scheduler
    pub async fn shutdown(&mut self) -> Result<(), AppError> {
        self.scheduler
            .shutdown()
            .await
            .map_err(|e| AppError::internal(format!("Failed to shutdown scheduler: {e}")))?;

        tracing::info!("Maintenance scheduler shut down");
        Ok(())
    }

    /// Overdue loan reminders
    async fn register_overdue_scan(&self) -> Result<(), AppError> {
        let handler = Arc::clone(&self.loan_scan);
        let job = CronJob::new_async(
            self.config.overdue_scan_schedule.as_str(),
            move |_uuid, _lock| {
                let handler = Arc::clone(&handler);
                Box::pin(async move {
                    tracing::debug!("Running overdue loan scan");
                    if let Err(e) = handler.scan_overdue().await {
                        tracing::error!("Overdue loan scan failed: {e}");
                    }
                })
            },
        )
        .map_err(|e| AppError::internal(format!("Failed to create overdue_scan schedule: {e}")))?;

        self.scheduler
            .add(job)
            .await
            .map_err(|e| AppError::internal(format!("Failed to add overdue_scan schedule: {e}")))?;

        tracing::info!(
            schedule = %self.config.overdue_scan_schedule,
            "Registered: overdue_scan"
        );
        Ok(())
    }

    /// Due-soon loan reminders
    async fn register_due_soon_scan(&self) -> Result<(), AppError> {
        let handler = Arc::clone(&self.loan_scan);
        let job = CronJob::new_async(
            self.config.due_soon_scan_schedule.as_str(),
            move |_uuid, _lock| {
                let handler = Arc::clone(&handler);
                Box::pin(async move {
                    tracing::debug!("Running due-soon loan scan");
                    if let Err(e) = handler.scan_due_soon().await {
                        tracing::error!("Due-soon loan scan failed: {e}");
                    }
                })
            },
        )
        .map_err(|e| AppError::internal(format!("Failed to create due_soon_scan schedule: {e}")))?;

        self.scheduler
            .add(job)
            .await
            .map_err(|e| AppError::internal(format!("Failed to add due_soon_scan schedule: {e}")))?;

        tracing::info!(
            schedule = %self.config.due_soon_scan_schedule,
            "Registered: due_soon_scan"
        );
        Ok(())
    }

    /// Low-stock alerts for managers
    async fn register_low_stock_scan(&self) -> Result<(), AppError> {
        let handler = Arc::clone(&self.low_stock_scan);
        let job = CronJob::new_async(
            self.config.low_stock_scan_schedule.as_str(),
            move |_uuid, _lock| {
                let handler = Arc::clone(&handler);
                Box::pin(async move {
                    tracing::debug!("Running low-stock scan");
                    if let Err(e) = handler.scan().await {
                        tracing::error!("Low-stock scan failed: {e}");
                    }
                })
            },
        )
        .map_err(|e| AppError::internal(format!("Failed to create low_stock_scan schedule: {e}")))?;

        self.scheduler
            .add(job)
            .await
            .map_err(|e| {
                AppError::internal(format!("Failed to add low_stock_scan schedule: {e}"))
            })?;

        tracing::info!(
            schedule = %self.config.low_stock_scan_schedule,
            "Registered: low_stock_scan"
        );
        Ok(())
    }
}
