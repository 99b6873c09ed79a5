//! Notification repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use gudang_core::error::AppError;
use gudang_core::result::AppResult;
use gudang_core::types::pagination::{PageRequest, PageResponse};
use gudang_entity::notification::{Notification, NotificationEvent};

use crate::connection::map_db_error;

/// Repository for notification CRUD operations.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List notifications for a user.
    pub async fn find_by_user(
        &self,
        user_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Notification>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM notifications WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| map_db_error("Failed to count notifications", e))?;

        let notifs = sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE user_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(user_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error("Failed to list notifications", e))?;

        Ok(PageResponse::new(
            notifs,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Count unread notifications for a user.
    pub async fn count_unread(&self, user_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications WHERE user_id = $1 AND is_read = FALSE",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error("Failed to count unread notifications", e))
    }

    /// Create a notification.
    pub async fn create(
        &self,
        user_id: Uuid,
        event_type: NotificationEvent,
        message: &str,
        related_item_id: Option<i64>,
    ) -> AppResult<Notification> {
        sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications (user_id, event_type, message, related_item_id) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(user_id)
        .bind(event_type)
        .bind(message)
        .bind(related_item_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error("Failed to create notification", e))
    }

    /// Whether an unread notification of this event already exists.
    ///
    /// Used by the worker scans so repeated runs do not pile up duplicate
    /// reminders for the same condition.
    pub async fn exists_unread(
        &self,
        user_id: Uuid,
        event_type: NotificationEvent,
        related_item_id: Option<i64>,
    ) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications \
             WHERE user_id = $1 AND event_type = $2 AND is_read = FALSE \
             AND ($3::bigint IS NULL OR related_item_id = $3)",
        )
        .bind(user_id)
        .bind(event_type)
        .bind(related_item_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error("Failed to check for existing notification", e))?;

        Ok(count > 0)
    }

    /// Mark a notification as read. Scoped to the owning user.
    pub async fn mark_read(&self, notification_id: Uuid, user_id: Uuid) -> AppResult<()> {
        let result =
            sqlx::query("UPDATE notifications SET is_read = TRUE WHERE id = $1 AND user_id = $2")
                .bind(notification_id)
                .bind(user_id)
                .execute(&self.pool)
                .await
                .map_err(|e| map_db_error("Failed to mark notification read", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "Notification {notification_id} not found"
            )));
        }
        Ok(())
    }

    /// Mark all of a user's notifications as read; returns how many changed.
    pub async fn mark_all_read(&self, user_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = TRUE WHERE user_id = $1 AND is_read = FALSE",
        )
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_error("Failed to mark all read", e))?;

        Ok(result.rows_affected())
    }

    /// Delete a notification. Scoped to the owning user.
    pub async fn delete(&self, notification_id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM notifications WHERE id = $1 AND user_id = $2")
            .bind(notification_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to delete notification", e))?;

        Ok(result.rows_affected() > 0)
    }
}
