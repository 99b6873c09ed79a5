//! Dashboard handlers.

use axum::Json;
use axum::extract::State;

use gudang_core::error::AppError;
use gudang_database::repositories::dashboard::DashboardCounts;

use crate::dto::response::ApiResponse;
use crate::state::AppState;

/// GET /api/dashboard/stats
pub async fn stats(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DashboardCounts>>, AppError> {
    let counts = state.dashboard_service.stats().await?;
    Ok(Json(ApiResponse::ok(counts)))
}
