//! Category handlers.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use gudang_core::error::AppError;
use gudang_entity::category::model::Category;

use crate::dto::request::CreateCategoryRequest;
use crate::dto::response::ApiResponse;
use crate::state::AppState;

/// GET /api/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Category>>>, AppError> {
    let categories = state.category_service.list_categories().await?;
    Ok(Json(ApiResponse::ok(categories)))
}

/// POST /api/categories
pub async fn create_category(
    State(state): State<AppState>,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<Json<ApiResponse<Category>>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let category = state
        .category_service
        .create_category(req.slug, req.name)
        .await?;

    Ok(Json(ApiResponse::ok(category)))
}
