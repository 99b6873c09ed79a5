//! Item repository implementation.

use sqlx::PgPool;

use gudang_core::error::AppError;
use gudang_core::result::AppResult;
use gudang_core::types::pagination::{PageRequest, PageResponse};
use gudang_entity::item::model::{CreateItem, UpdateItem};
use gudang_entity::item::{Item, ItemStatus};

use crate::connection::map_db_error;

/// Filters accepted by the item listing query.
#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    /// Restrict to a category slug.
    pub category: Option<String>,
    /// Case-insensitive substring match on name or description.
    pub search: Option<String>,
}

/// Repository for item CRUD and stock queries.
///
/// Stock *mutations* tied to requests and loans live in
/// [`crate::repositories::RequestRepository`] and
/// [`crate::repositories::LoanRepository`], inside their transactions.
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: PgPool,
}

impl ItemRepository {
    /// Create a new item repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an item by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Item>> {
        sqlx::query_as::<_, Item>("SELECT * FROM items WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to find item", e))
    }

    /// List items with pagination and optional filters.
    pub async fn find_all(
        &self,
        filter: &ItemFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Item>> {
        let pattern = filter.search.as_ref().map(|s| format!("%{s}%"));

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM items \
             WHERE ($1::text IS NULL OR category = $1) \
             AND ($2::text IS NULL OR name ILIKE $2 OR description ILIKE $2)",
        )
        .bind(&filter.category)
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error("Failed to count items", e))?;

        let items = sqlx::query_as::<_, Item>(
            "SELECT * FROM items \
             WHERE ($1::text IS NULL OR category = $1) \
             AND ($2::text IS NULL OR name ILIKE $2 OR description ILIKE $2) \
             ORDER BY name ASC LIMIT $3 OFFSET $4",
        )
        .bind(&filter.category)
        .bind(&pattern)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error("Failed to list items", e))?;

        Ok(PageResponse::new(
            items,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List items at or below their reorder threshold.
    ///
    /// Status is computed from the counters in SQL rather than read from
    /// the stored column, so a stale persisted status cannot hide an item.
    pub async fn find_low_stock(&self, page: &PageRequest) -> AppResult<PageResponse<Item>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM items WHERE quantity <= min_quantity")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| map_db_error("Failed to count low-stock items", e))?;

        let items = sqlx::query_as::<_, Item>(
            "SELECT * FROM items WHERE quantity <= min_quantity \
             ORDER BY quantity ASC, name ASC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error("Failed to list low-stock items", e))?;

        Ok(PageResponse::new(
            items,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a new item. The stored status is derived from the counters.
    pub async fn create(&self, data: &CreateItem) -> AppResult<Item> {
        let status = ItemStatus::derive(data.quantity, data.min_quantity);

        sqlx::query_as::<_, Item>(
            "INSERT INTO items (name, description, category, quantity, min_quantity, price, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.category)
        .bind(data.quantity)
        .bind(data.min_quantity)
        .bind(data.price)
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error("Failed to create item", e))
    }

    /// Update an item's catalog fields, re-deriving the stored status.
    pub async fn update(&self, data: &UpdateItem) -> AppResult<Item> {
        sqlx::query_as::<_, Item>(
            "UPDATE items SET name = COALESCE($2, name), \
                              description = COALESCE($3, description), \
                              category = COALESCE($4, category), \
                              quantity = COALESCE($5, quantity), \
                              min_quantity = COALESCE($6, min_quantity), \
                              price = COALESCE($7, price), \
                              status = CASE \
                                  WHEN COALESCE($5, quantity) <= 0 THEN 'out-of-stock'::item_status \
                                  WHEN COALESCE($5, quantity) <= COALESCE($6, min_quantity) THEN 'low-stock'::item_status \
                                  ELSE 'in-stock'::item_status \
                              END, \
                              updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(data.id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.category)
        .bind(data.quantity)
        .bind(data.min_quantity)
        .bind(data.price)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("Failed to update item", e))?
        .ok_or_else(|| AppError::not_found(format!("Item {} not found", data.id)))
    }

    /// Delete an item by ID.
    pub async fn delete(&self, item_id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(item_id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to delete item", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Count total items.
    pub async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to count items", e))?;
        Ok(count as u64)
    }
}
