//! Request repository implementation.
//!
//! Holds the approval workflow transaction: the status transition and its
//! stock deduction commit together or not at all.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use gudang_core::error::AppError;
use gudang_core::result::AppResult;
use gudang_core::types::pagination::{PageRequest, PageResponse};
use gudang_entity::item::{Item, ItemStatus};
use gudang_entity::request::model::{CreateRequest, Request, RequestItem, RequestWithItems};
use gudang_entity::request::status::RequestStatus;

use crate::connection::map_db_error;

/// Repository for stock requests and the approval workflow.
#[derive(Debug, Clone)]
pub struct RequestRepository {
    pool: PgPool,
}

impl RequestRepository {
    /// Create a new request repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a request by primary key, with its lines.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<RequestWithItems>> {
        let request = sqlx::query_as::<_, Request>("SELECT * FROM requests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to find request", e))?;

        let Some(request) = request else {
            return Ok(None);
        };

        let items = self.find_items(id).await?;
        Ok(Some(RequestWithItems { request, items }))
    }

    /// List requests with pagination and an optional status filter.
    pub async fn find_all(
        &self,
        status: Option<RequestStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Request>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM requests WHERE ($1::request_status IS NULL OR status = $1)",
        )
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error("Failed to count requests", e))?;

        let requests = sqlx::query_as::<_, Request>(
            "SELECT * FROM requests WHERE ($1::request_status IS NULL OR status = $1) \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(status)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error("Failed to list requests", e))?;

        Ok(PageResponse::new(
            requests,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List requests filed by a user.
    pub async fn find_by_requester(
        &self,
        requester_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Request>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM requests WHERE requester_id = $1")
            .bind(requester_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to count requests by requester", e))?;

        let requests = sqlx::query_as::<_, Request>(
            "SELECT * FROM requests WHERE requester_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(requester_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error("Failed to list requests by requester", e))?;

        Ok(PageResponse::new(
            requests,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a request together with all of its lines, atomically.
    pub async fn create(&self, data: &CreateRequest) -> AppResult<RequestWithItems> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_db_error("Failed to begin transaction", e))?;

        let request = sqlx::query_as::<_, Request>(
            "INSERT INTO requests (project_name, requester_id, reason, priority, due_date) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&data.project_name)
        .bind(data.requester_id)
        .bind(&data.reason)
        .bind(data.priority)
        .bind(data.due_date)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_db_error("Failed to create request", e))?;

        let mut items = Vec::with_capacity(data.items.len());
        for line in &data.items {
            let item = sqlx::query_as::<_, RequestItem>(
                "INSERT INTO request_items (request_id, item_id, quantity) \
                 VALUES ($1, $2, $3) RETURNING *",
            )
            .bind(request.id)
            .bind(line.item_id)
            .bind(line.quantity)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err)
                    if db_err.constraint() == Some("request_items_item_id_fkey") =>
                {
                    AppError::not_found(format!("Item {} not found", line.item_id))
                }
                _ => map_db_error("Failed to create request line", e),
            })?;
            items.push(item);
        }

        tx.commit()
            .await
            .map_err(|e| map_db_error("Failed to commit request creation", e))?;

        info!(request_id = %request.id, lines = items.len(), "Request created");

        Ok(RequestWithItems { request, items })
    }

    /// Transition a request's status, applying the stock deduction when the
    /// transition is `pending -> approved`.
    ///
    /// Runs as a single transaction: the request row and every referenced
    /// item row are locked with `SELECT ... FOR UPDATE`, all deductions are
    /// applied, then the status is written. Any failure rolls the whole
    /// transaction back, leaving the request and all items untouched.
    ///
    /// The deduction fires only out of `Pending`; approving an
    /// already-approved request is a `Conflict`, so stock can never be
    /// deducted twice for the same request.
    pub async fn update_status(
        &self,
        request_id: Uuid,
        new_status: RequestStatus,
    ) -> AppResult<RequestWithItems> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_db_error("Failed to begin transaction", e))?;

        let request =
            sqlx::query_as::<_, Request>("SELECT * FROM requests WHERE id = $1 FOR UPDATE")
                .bind(request_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| map_db_error("Failed to lock request", e))?
                .ok_or_else(|| AppError::not_found(format!("Request {request_id} not found")))?;

        if !request.status.can_transition_to(new_status) {
            return Err(AppError::conflict(format!(
                "Request {request_id} is '{}' and cannot move to '{new_status}'",
                request.status
            )));
        }

        if new_status == RequestStatus::Approved {
            self.deduct_stock(&mut tx, request_id).await?;
        }

        let updated = sqlx::query_as::<_, Request>(
            "UPDATE requests SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(request_id)
        .bind(new_status)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_db_error("Failed to update request status", e))?;

        tx.commit()
            .await
            .map_err(|e| map_db_error("Failed to commit status update", e))?;

        info!(
            request_id = %request_id,
            from = %request.status,
            to = %new_status,
            "Request status updated"
        );

        let items = self.find_items(request_id).await?;
        Ok(RequestWithItems {
            request: updated,
            items,
        })
    }

    /// Apply the approval deduction to every line of the request.
    ///
    /// Each item row is locked before the read-modify-write so concurrent
    /// approvals against the same item serialize instead of losing updates.
    /// Quantities floor at zero and the stored status is re-derived from
    /// the new quantity.
    async fn deduct_stock(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        request_id: Uuid,
    ) -> AppResult<()> {
        let lines = sqlx::query_as::<_, RequestItem>(
            "SELECT * FROM request_items WHERE request_id = $1 ORDER BY item_id ASC",
        )
        .bind(request_id)
        .fetch_all(&mut **tx)
        .await
        .map_err(|e| map_db_error("Failed to load request lines", e))?;

        for line in &lines {
            let item = sqlx::query_as::<_, Item>("SELECT * FROM items WHERE id = $1 FOR UPDATE")
                .bind(line.item_id)
                .fetch_optional(&mut **tx)
                .await
                .map_err(|e| map_db_error("Failed to lock item", e))?
                .ok_or_else(|| {
                    AppError::not_found(format!(
                        "Item {} referenced by request {request_id} not found",
                        line.item_id
                    ))
                })?;

            let new_quantity = (item.quantity - line.quantity).max(0);
            let new_status = ItemStatus::derive(new_quantity, item.min_quantity);

            sqlx::query(
                "UPDATE items SET quantity = $2, status = $3, updated_at = NOW() WHERE id = $1",
            )
            .bind(item.id)
            .bind(new_quantity)
            .bind(new_status)
            .execute(&mut **tx)
            .await
            .map_err(|e| map_db_error("Failed to deduct item stock", e))?;
        }

        Ok(())
    }

    /// Load the lines of a request.
    pub async fn find_items(&self, request_id: Uuid) -> AppResult<Vec<RequestItem>> {
        sqlx::query_as::<_, RequestItem>(
            "SELECT * FROM request_items WHERE request_id = $1 ORDER BY item_id ASC",
        )
        .bind(request_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error("Failed to load request lines", e))
    }

    /// Count requests in a given status.
    pub async fn count_by_status(&self, status: RequestStatus) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM requests WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to count requests", e))?;
        Ok(count as u64)
    }
}
