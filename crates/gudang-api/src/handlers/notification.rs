//! Notification handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use uuid::Uuid;

use gudang_core::error::AppError;
use gudang_core::types::pagination::PageResponse;
use gudang_entity::notification::Notification;

use crate::dto::response::{ApiResponse, CountResponse, MessageResponse};
use crate::state::AppState;

/// Query parameters identifying the notification recipient.
///
/// Authentication carries no session, so list endpoints take the user
/// explicitly, the way the original client passes it.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationParams {
    /// The recipient user.
    pub user_id: Uuid,
    /// Page number (1-based, default: 1).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page (default: 25, max: 100).
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    25
}

/// Body identifying the acting user for notification mutations.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationActor {
    /// The owning user.
    pub user_id: Uuid,
}

/// GET /api/notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    Query(params): Query<NotificationParams>,
) -> Result<Json<ApiResponse<PageResponse<Notification>>>, AppError> {
    let page_request = gudang_core::types::pagination::PageRequest::new(params.page, params.per_page);
    let page = state
        .notification_service
        .list_notifications(params.user_id, page_request)
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/notifications/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
    Query(params): Query<NotificationActor>,
) -> Result<Json<ApiResponse<CountResponse>>, AppError> {
    let count = state
        .notification_service
        .unread_count(params.user_id)
        .await?;
    Ok(Json(ApiResponse::ok(CountResponse { count })))
}

/// PUT /api/notifications/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<NotificationActor>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state
        .notification_service
        .mark_read(body.user_id, id)
        .await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Marked as read".to_string(),
    })))
}

/// PUT /api/notifications/read-all
pub async fn mark_all_read(
    State(state): State<AppState>,
    Json(body): Json<NotificationActor>,
) -> Result<Json<ApiResponse<CountResponse>>, AppError> {
    let marked = state
        .notification_service
        .mark_all_read(body.user_id)
        .await?;
    Ok(Json(ApiResponse::ok(CountResponse {
        count: marked as i64,
    })))
}

/// DELETE /api/notifications/{id}
pub async fn delete_notification(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<NotificationActor>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.notification_service.delete(params.user_id, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Notification deleted".to_string(),
    })))
}
