//! Loan repository implementation.
//!
//! Borrow and return run inside transactions that lock the item row, so
//! the availability check and the counter update are atomic.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use gudang_core::error::AppError;
use gudang_core::result::AppResult;
use gudang_core::types::pagination::{PageRequest, PageResponse};
use gudang_entity::item::Item;
use gudang_entity::loan::model::{CreateLoan, Loan};
use gudang_entity::loan::status::LoanStatus;

use crate::connection::map_db_error;

/// Repository for loan bookkeeping.
#[derive(Debug, Clone)]
pub struct LoanRepository {
    pool: PgPool,
}

impl LoanRepository {
    /// Create a new loan repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a loan by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Loan>> {
        sqlx::query_as::<_, Loan>("SELECT * FROM loans WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to find loan", e))
    }

    /// List loans with pagination.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Loan>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM loans")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to count loans", e))?;

        let loans = sqlx::query_as::<_, Loan>(
            "SELECT * FROM loans ORDER BY borrowed_date DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error("Failed to list loans", e))?;

        Ok(PageResponse::new(
            loans,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List loans held by a user.
    pub async fn find_by_user(
        &self,
        user_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Loan>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM loans WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to count loans by user", e))?;

        let loans = sqlx::query_as::<_, Loan>(
            "SELECT * FROM loans WHERE user_id = $1 \
             ORDER BY borrowed_date DESC LIMIT $2 OFFSET $3",
        )
        .bind(user_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error("Failed to list loans by user", e))?;

        Ok(PageResponse::new(
            loans,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List active loans whose due date has passed as of `now`.
    pub async fn find_overdue(&self, now: DateTime<Utc>) -> AppResult<Vec<Loan>> {
        sqlx::query_as::<_, Loan>(
            "SELECT * FROM loans WHERE status = 'active' AND due_date < $1 \
             ORDER BY due_date ASC",
        )
        .bind(now)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error("Failed to list overdue loans", e))
    }

    /// List active loans due between `now` and `until`.
    pub async fn find_due_between(
        &self,
        now: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> AppResult<Vec<Loan>> {
        sqlx::query_as::<_, Loan>(
            "SELECT * FROM loans WHERE status = 'active' AND due_date >= $1 AND due_date < $2 \
             ORDER BY due_date ASC",
        )
        .bind(now)
        .bind(until)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error("Failed to list due-soon loans", e))
    }

    /// Borrow an item: check availability, create the loan, and bump the
    /// item's borrowed counter, all under a row lock on the item.
    ///
    /// Fails with `InsufficientStock` when the requested quantity exceeds
    /// `quantity - borrowed_quantity`; in that case nothing is written.
    pub async fn borrow(&self, data: &CreateLoan) -> AppResult<Loan> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_db_error("Failed to begin transaction", e))?;

        let item = sqlx::query_as::<_, Item>("SELECT * FROM items WHERE id = $1 FOR UPDATE")
            .bind(data.item_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| map_db_error("Failed to lock item", e))?
            .ok_or_else(|| AppError::not_found(format!("Item {} not found", data.item_id)))?;

        let available = item.available();
        if data.quantity > available {
            return Err(AppError::insufficient_stock(format!(
                "Item '{}' has {available} of {} available; cannot borrow {}",
                item.name, item.quantity, data.quantity
            )));
        }

        let loan = sqlx::query_as::<_, Loan>(
            "INSERT INTO loans (user_id, item_id, quantity, due_date, notes) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.item_id)
        .bind(data.quantity)
        .bind(data.due_date)
        .bind(&data.notes)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_db_error("Failed to create loan", e))?;

        sqlx::query(
            "UPDATE items SET borrowed_quantity = borrowed_quantity + $2, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(data.item_id)
        .bind(data.quantity)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_db_error("Failed to update borrowed quantity", e))?;

        tx.commit()
            .await
            .map_err(|e| map_db_error("Failed to commit borrow", e))?;

        info!(
            loan_id = %loan.id,
            item_id = data.item_id,
            quantity = data.quantity,
            "Loan created"
        );

        Ok(loan)
    }

    /// Return a loan: mark it returned and release the borrowed quantity.
    ///
    /// Fails with `NotFound` if the loan does not exist and `Conflict` if
    /// it has already been returned; neither leaves any mutation behind.
    pub async fn return_loan(&self, loan_id: Uuid, notes: Option<&str>) -> AppResult<Loan> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_db_error("Failed to begin transaction", e))?;

        let loan = sqlx::query_as::<_, Loan>("SELECT * FROM loans WHERE id = $1 FOR UPDATE")
            .bind(loan_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| map_db_error("Failed to lock loan", e))?
            .ok_or_else(|| AppError::not_found(format!("Loan {loan_id} not found")))?;

        if loan.status != LoanStatus::Active {
            return Err(AppError::conflict(format!(
                "Loan {loan_id} has already been returned"
            )));
        }

        let updated = sqlx::query_as::<_, Loan>(
            "UPDATE loans SET status = 'returned', returned_date = NOW(), \
                              notes = COALESCE($2, notes) \
             WHERE id = $1 RETURNING *",
        )
        .bind(loan_id)
        .bind(notes)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_db_error("Failed to update loan", e))?;

        // Floors at zero so a drifted counter cannot violate the CHECK.
        sqlx::query(
            "UPDATE items SET borrowed_quantity = GREATEST(0, borrowed_quantity - $2), \
                              updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(loan.item_id)
        .bind(loan.quantity)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_db_error("Failed to release borrowed quantity", e))?;

        tx.commit()
            .await
            .map_err(|e| map_db_error("Failed to commit return", e))?;

        info!(loan_id = %loan_id, item_id = loan.item_id, "Loan returned");

        Ok(updated)
    }

    /// Count active loans.
    pub async fn count_active(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM loans WHERE status = 'active'")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to count active loans", e))?;
        Ok(count as u64)
    }

    /// Count active loans past their due date as of `now`.
    pub async fn count_overdue(&self, now: DateTime<Utc>) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM loans WHERE status = 'active' AND due_date < $1",
        )
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error("Failed to count overdue loans", e))?;
        Ok(count as u64)
    }
}
