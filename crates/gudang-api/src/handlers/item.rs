//! Item catalog handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use validator::Validate;

use gudang_core::error::AppError;
use gudang_core::types::pagination::PageResponse;
use gudang_database::repositories::item::ItemFilter;
use gudang_entity::item::model::{CreateItem, UpdateItem};

use crate::dto::request::{CreateItemRequest, UpdateItemRequest};
use crate::dto::response::{ApiResponse, ItemResponse, MessageResponse};
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// Query parameters accepted by the item listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemListParams {
    /// Restrict to a category slug.
    pub category: Option<String>,
    /// Case-insensitive substring match on name or description.
    pub search: Option<String>,
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

/// GET /api/items
pub async fn list_items(
    State(state): State<AppState>,
    Query(params): Query<ItemListParams>,
) -> Result<Json<ApiResponse<PageResponse<ItemResponse>>>, AppError> {
    let filter = ItemFilter {
        category: params.category,
        search: params.search,
    };
    let page_request = gudang_core::types::pagination::PageRequest::new(params.page, params.per_page);
    let page = state.item_service.list_items(filter, page_request).await?;
    Ok(Json(ApiResponse::ok(page.map(ItemResponse::from))))
}

/// GET /api/items/low-stock
pub async fn list_low_stock(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<ItemResponse>>>, AppError> {
    let page = state
        .item_service
        .list_low_stock(params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page.map(ItemResponse::from))))
}

/// GET /api/items/{id}
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<ItemResponse>>, AppError> {
    let item = state.item_service.get_item(id).await?;
    Ok(Json(ApiResponse::ok(item.into())))
}

/// POST /api/items
pub async fn create_item(
    State(state): State<AppState>,
    Json(req): Json<CreateItemRequest>,
) -> Result<Json<ApiResponse<ItemResponse>>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let item = state
        .item_service
        .create_item(CreateItem {
            name: req.name,
            description: req.description,
            category: req.category,
            quantity: req.quantity,
            min_quantity: req.min_quantity,
            price: req.price,
        })
        .await?;

    Ok(Json(ApiResponse::ok(item.into())))
}

/// PUT /api/items/{id}
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateItemRequest>,
) -> Result<Json<ApiResponse<ItemResponse>>, AppError> {
    let item = state
        .item_service
        .update_item(UpdateItem {
            id,
            name: req.name,
            description: req.description,
            category: req.category,
            quantity: req.quantity,
            min_quantity: req.min_quantity,
            price: req.price,
        })
        .await?;

    Ok(Json(ApiResponse::ok(item.into())))
}

/// DELETE /api/items/{id}
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.item_service.delete_item(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: format!("Item {id} deleted"),
    })))
}
