//! Borrow/return bookkeeping.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use gudang_core::config::loan::LoanConfig;
use gudang_core::error::AppError;
use gudang_core::types::pagination::{PageRequest, PageResponse};
use gudang_database::repositories::loan::LoanRepository;
use gudang_database::repositories::user::UserRepository;
use gudang_entity::loan::Loan;
use gudang_entity::loan::model::CreateLoan;

/// Manages item loans.
#[derive(Debug, Clone)]
pub struct LoanService {
    /// Loan repository.
    loan_repo: Arc<LoanRepository>,
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Loan policy settings.
    config: LoanConfig,
}

impl LoanService {
    /// Creates a new loan service.
    pub fn new(
        loan_repo: Arc<LoanRepository>,
        user_repo: Arc<UserRepository>,
        config: LoanConfig,
    ) -> Self {
        Self {
            loan_repo,
            user_repo,
            config,
        }
    }

    /// Gets a loan by ID.
    pub async fn get_loan(&self, id: Uuid) -> Result<Loan, AppError> {
        self.loan_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Loan {id} not found")))
    }

    /// Lists all loans.
    pub async fn list_loans(&self, page: PageRequest) -> Result<PageResponse<Loan>, AppError> {
        self.loan_repo.find_all(&page).await
    }

    /// Lists a user's loans.
    pub async fn list_by_user(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<PageResponse<Loan>, AppError> {
        self.loan_repo.find_by_user(user_id, &page).await
    }

    /// Lists active loans past their due date.
    pub async fn list_overdue(&self) -> Result<Vec<Loan>, AppError> {
        self.loan_repo.find_overdue(Utc::now()).await
    }

    /// Borrows an item.
    ///
    /// Quantity and due-date validation run before the transaction; the
    /// availability check happens inside it, under the item row lock.
    pub async fn borrow(&self, data: CreateLoan) -> Result<Loan, AppError> {
        if data.quantity <= 0 {
            return Err(AppError::validation("Borrow quantity must be positive"));
        }
        self.validate_due_date(data.due_date, Utc::now())?;

        self.user_repo
            .find_by_id(data.user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {} not found", data.user_id)))?;

        self.loan_repo.borrow(&data).await
    }

    /// Returns a loan.
    pub async fn return_loan(&self, loan_id: Uuid, notes: Option<String>) -> Result<Loan, AppError> {
        self.loan_repo.return_loan(loan_id, notes.as_deref()).await
    }

    /// Check that a due date falls inside the configured borrow window.
    fn validate_due_date(&self, due_date: DateTime<Utc>, now: DateTime<Utc>) -> Result<(), AppError> {
        let min = now + Duration::days(self.config.min_duration_days);
        let max = now + Duration::days(self.config.max_duration_days);

        if due_date < min || due_date > max {
            return Err(AppError::validation(format!(
                "Due date must be between {} and {} days from now",
                self.config.min_duration_days, self.config.max_duration_days
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> LoanService {
        // validate_due_date never touches the repositories; a lazy pool is
        // enough to construct the service.
        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(1)
            .connect_lazy("postgres://localhost/unused")
            .expect("lazy pool");
        LoanService::new(
            Arc::new(LoanRepository::new(pool.clone())),
            Arc::new(UserRepository::new(pool)),
            LoanConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_due_date_window() {
        let svc = service();
        let now = Utc::now();

        // inside the window
        assert!(svc.validate_due_date(now + Duration::days(7), now).is_ok());
        assert!(svc.validate_due_date(now + Duration::days(30), now).is_ok());

        // too soon
        assert!(svc.validate_due_date(now + Duration::hours(12), now).is_err());
        // in the past
        assert!(svc.validate_due_date(now - Duration::days(1), now).is_err());
        // too far out
        assert!(svc.validate_due_date(now + Duration::days(31), now).is_err());
    }
}
