//! Loan reminder scans.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::info;

use gudang_core::config::loan::LoanConfig;
use gudang_core::error::AppError;
use gudang_database::repositories::loan::LoanRepository;
use gudang_entity::notification::NotificationEvent;
use gudang_service::notification::NotificationService;

/// Scans loans and notifies borrowers of overdue and due-soon loans.
#[derive(Clone)]
pub struct LoanScanHandler {
    /// Loan repository.
    loan_repo: Arc<LoanRepository>,
    /// Notification service.
    notifications: Arc<NotificationService>,
    /// Loan policy settings.
    config: LoanConfig,
}

impl LoanScanHandler {
    /// Creates a new loan scan handler.
    pub fn new(
        loan_repo: Arc<LoanRepository>,
        notifications: Arc<NotificationService>,
        config: LoanConfig,
    ) -> Self {
        Self {
            loan_repo,
            notifications,
            config,
        }
    }

    /// Notify borrowers whose active loans are past due.
    ///
    /// `notify_once` deduplicates against unread notifications, so a loan
    /// that stays overdue produces one reminder, not one per scan.
    pub async fn scan_overdue(&self) -> Result<(), AppError> {
        let overdue = self.loan_repo.find_overdue(Utc::now()).await?;
        let mut notified = 0usize;

        for loan in &overdue {
            let message = format!(
                "Your loan of {} unit(s) of item {} was due on {}",
                loan.quantity,
                loan.item_id,
                loan.due_date.format("%Y-%m-%d")
            );
            if self
                .notifications
                .notify_once(
                    loan.user_id,
                    NotificationEvent::LoanOverdue,
                    message,
                    Some(loan.item_id),
                )
                .await?
            {
                notified += 1;
            }
        }

        info!(overdue = overdue.len(), notified, "Overdue loan scan complete");
        Ok(())
    }

    /// Notify borrowers whose active loans come due within the configured
    /// window.
    pub async fn scan_due_soon(&self) -> Result<(), AppError> {
        let now = Utc::now();
        let until = now + Duration::hours(self.config.due_soon_hours);
        let due_soon = self.loan_repo.find_due_between(now, until).await?;
        let mut notified = 0usize;

        for loan in &due_soon {
            let message = format!(
                "Your loan of {} unit(s) of item {} is due on {}",
                loan.quantity,
                loan.item_id,
                loan.due_date.format("%Y-%m-%d")
            );
            if self
                .notifications
                .notify_once(
                    loan.user_id,
                    NotificationEvent::LoanDueSoon,
                    message,
                    Some(loan.item_id),
                )
                .await?
            {
                notified += 1;
            }
        }

        info!(due_soon = due_soon.len(), notified, "Due-soon loan scan complete");
        Ok(())
    }
}
