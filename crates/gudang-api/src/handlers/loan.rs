//! Loan handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use gudang_core::error::AppError;
use gudang_core::types::pagination::PageResponse;
use gudang_entity::loan::model::CreateLoan;

use crate::dto::request::{BorrowRequest, ReturnRequest};
use crate::dto::response::{ApiResponse, LoanResponse};
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// GET /api/loans
pub async fn list_loans(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<LoanResponse>>>, AppError> {
    let page = state
        .loan_service
        .list_loans(params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page.map(LoanResponse::from))))
}

/// GET /api/loans/overdue
pub async fn list_overdue(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<LoanResponse>>>, AppError> {
    let loans = state.loan_service.list_overdue().await?;
    Ok(Json(ApiResponse::ok(
        loans.into_iter().map(LoanResponse::from).collect(),
    )))
}

/// GET /api/loans/{id}
pub async fn get_loan(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<LoanResponse>>, AppError> {
    let loan = state.loan_service.get_loan(id).await?;
    Ok(Json(ApiResponse::ok(loan.into())))
}

/// GET /api/loans/user/{user_id}
pub async fn list_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<LoanResponse>>>, AppError> {
    let page = state
        .loan_service
        .list_by_user(user_id, params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page.map(LoanResponse::from))))
}

/// POST /api/loans/borrow
pub async fn borrow(
    State(state): State<AppState>,
    Json(req): Json<BorrowRequest>,
) -> Result<Json<ApiResponse<LoanResponse>>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let loan = state
        .loan_service
        .borrow(CreateLoan {
            user_id: req.user_id,
            item_id: req.item_id,
            quantity: req.quantity,
            due_date: req.due_date,
            notes: req.notes,
        })
        .await?;

    Ok(Json(ApiResponse::ok(loan.into())))
}

/// POST /api/loans/return
pub async fn return_loan(
    State(state): State<AppState>,
    Json(req): Json<ReturnRequest>,
) -> Result<Json<ApiResponse<LoanResponse>>, AppError> {
    let loan = state
        .loan_service
        .return_loan(req.loan_id, req.notes)
        .await?;

    Ok(Json(ApiResponse::ok(loan.into())))
}
