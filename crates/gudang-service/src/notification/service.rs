//! Notification CRUD and delivery helpers.

use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use gudang_core::error::AppError;
use gudang_core::types::pagination::{PageRequest, PageResponse};
use gudang_database::repositories::notification::NotificationRepository;
use gudang_entity::notification::{Notification, NotificationEvent};

/// Manages user notifications.
#[derive(Debug, Clone)]
pub struct NotificationService {
    /// Notification repository.
    notif_repo: Arc<NotificationRepository>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(notif_repo: Arc<NotificationRepository>) -> Self {
        Self { notif_repo }
    }

    /// Lists notifications for a user.
    pub async fn list_notifications(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<PageResponse<Notification>, AppError> {
        self.notif_repo.find_by_user(user_id, &page).await
    }

    /// Gets the unread notification count.
    pub async fn unread_count(&self, user_id: Uuid) -> Result<i64, AppError> {
        self.notif_repo.count_unread(user_id).await
    }

    /// Marks a notification as read.
    pub async fn mark_read(&self, user_id: Uuid, notification_id: Uuid) -> Result<(), AppError> {
        self.notif_repo.mark_read(notification_id, user_id).await
    }

    /// Marks all notifications as read; returns how many changed.
    pub async fn mark_all_read(&self, user_id: Uuid) -> Result<u64, AppError> {
        self.notif_repo.mark_all_read(user_id).await
    }

    /// Deletes a notification.
    pub async fn delete(&self, user_id: Uuid, notification_id: Uuid) -> Result<(), AppError> {
        let deleted = self.notif_repo.delete(notification_id, user_id).await?;
        if !deleted {
            return Err(AppError::not_found(format!(
                "Notification {notification_id} not found"
            )));
        }
        Ok(())
    }

    /// Creates a notification for a user.
    pub async fn notify(
        &self,
        user_id: Uuid,
        event_type: NotificationEvent,
        message: String,
        related_item_id: Option<i64>,
    ) -> Result<Notification, AppError> {
        self.notif_repo
            .create(user_id, event_type, &message, related_item_id)
            .await
    }

    /// Creates a notification unless an unread one for the same event and
    /// item already exists. Returns whether a notification was created.
    pub async fn notify_once(
        &self,
        user_id: Uuid,
        event_type: NotificationEvent,
        message: String,
        related_item_id: Option<i64>,
    ) -> Result<bool, AppError> {
        if self
            .notif_repo
            .exists_unread(user_id, event_type, related_item_id)
            .await?
        {
            return Ok(false);
        }
        self.notify(user_id, event_type, message, related_item_id)
            .await?;
        Ok(true)
    }

    /// Fire-and-forget variant used after commits: failures are logged,
    /// never propagated, so a notification hiccup cannot fail the workflow
    /// that already committed.
    pub async fn notify_best_effort(
        &self,
        user_id: Uuid,
        event_type: NotificationEvent,
        message: String,
        related_item_id: Option<i64>,
    ) {
        if let Err(e) = self
            .notify(user_id, event_type, message, related_item_id)
            .await
        {
            warn!(user_id = %user_id, event = %event_type, error = %e, "Failed to deliver notification");
        }
    }
}
