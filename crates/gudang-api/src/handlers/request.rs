//! Stock request handlers.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use gudang_core::error::AppError;
use gudang_core::types::pagination::PageResponse;
use gudang_entity::request::model::{CreateRequest, CreateRequestItem};
use gudang_entity::request::priority::RequestPriority;
use gudang_entity::request::status::RequestStatus;

use crate::dto::request::{CreateRequestRequest, UpdateRequestStatusRequest};
use crate::dto::response::{ApiResponse, RequestResponse};
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// Query parameters accepted by the request listing.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestListParams {
    /// Restrict to a lifecycle state.
    pub status: Option<String>,
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

/// GET /api/requests
pub async fn list_requests(
    State(state): State<AppState>,
    Query(params): Query<RequestListParams>,
) -> Result<Json<ApiResponse<PageResponse<RequestResponse>>>, AppError> {
    let status = params
        .status
        .as_deref()
        .map(RequestStatus::from_str)
        .transpose()?;

    let page_request = gudang_core::types::pagination::PageRequest::new(params.page, params.per_page);
    let page = state.request_service.list_requests(status, page_request).await?;

    Ok(Json(ApiResponse::ok(page.map(RequestResponse::from))))
}

/// GET /api/requests/{id}
pub async fn get_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<RequestResponse>>, AppError> {
    let request = state.request_service.get_request(id).await?;
    Ok(Json(ApiResponse::ok(request.into())))
}

/// GET /api/requests/user/{user_id}
pub async fn list_by_requester(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<RequestResponse>>>, AppError> {
    let page = state
        .request_service
        .list_by_requester(user_id, params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page.map(RequestResponse::from))))
}

/// POST /api/requests
pub async fn create_request(
    State(state): State<AppState>,
    Json(req): Json<CreateRequestRequest>,
) -> Result<Json<ApiResponse<RequestResponse>>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let priority = RequestPriority::from_str(&req.priority)?;
    let created = state
        .request_service
        .create_request(CreateRequest {
            project_name: req.project_name,
            requester_id: req.requester_id,
            reason: req.reason,
            priority,
            due_date: req.due_date,
            items: req
                .items
                .into_iter()
                .map(|line| CreateRequestItem {
                    item_id: line.item_id,
                    quantity: line.quantity,
                })
                .collect(),
        })
        .await?;

    Ok(Json(ApiResponse::ok(created.into())))
}

/// PATCH /api/requests/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateRequestStatusRequest>,
) -> Result<Json<ApiResponse<RequestResponse>>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    // Parse (and thus validate) the target status before anything touches
    // the database.
    let status = RequestStatus::from_str(&req.status)?;
    let updated = state.request_service.update_status(id, status).await?;

    Ok(Json(ApiResponse::ok(updated.into())))
}
