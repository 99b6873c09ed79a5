//! User handlers.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use gudang_core::error::AppError;
use gudang_core::types::pagination::PageResponse;
use gudang_entity::user::UserRole;

use crate::dto::request::CreateUserRequest;
use crate::dto::response::{ApiResponse, UserResponse};
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<UserResponse>>>, AppError> {
    let page = state
        .user_service
        .list_users(params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page.map(UserResponse::from))))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let role = UserRole::from_str(&req.role)?;
    let user = state
        .user_service
        .create_user(req.username, req.email, &req.password, role)
        .await?;

    Ok(Json(ApiResponse::ok(user.into())))
}
