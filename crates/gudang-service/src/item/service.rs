//! Item catalog operations.

use std::sync::Arc;

use tracing::info;

use gudang_core::error::AppError;
use gudang_core::types::pagination::{PageRequest, PageResponse};
use gudang_database::repositories::item::{ItemFilter, ItemRepository};
use gudang_entity::item::Item;
use gudang_entity::item::model::{CreateItem, UpdateItem};

/// Manages the item catalog.
#[derive(Debug, Clone)]
pub struct ItemService {
    /// Item repository.
    item_repo: Arc<ItemRepository>,
}

impl ItemService {
    /// Creates a new item service.
    pub fn new(item_repo: Arc<ItemRepository>) -> Self {
        Self { item_repo }
    }

    /// Gets an item by ID.
    pub async fn get_item(&self, id: i64) -> Result<Item, AppError> {
        self.item_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Item {id} not found")))
    }

    /// Lists items with optional category/search filters.
    pub async fn list_items(
        &self,
        filter: ItemFilter,
        page: PageRequest,
    ) -> Result<PageResponse<Item>, AppError> {
        self.item_repo.find_all(&filter, &page).await
    }

    /// Lists items at or below their reorder threshold.
    pub async fn list_low_stock(&self, page: PageRequest) -> Result<PageResponse<Item>, AppError> {
        self.item_repo.find_low_stock(&page).await
    }

    /// Creates a new catalog item.
    pub async fn create_item(&self, data: CreateItem) -> Result<Item, AppError> {
        if data.name.trim().is_empty() {
            return Err(AppError::validation("Item name is required"));
        }
        if data.quantity < 0 {
            return Err(AppError::validation("Quantity cannot be negative"));
        }
        if data.min_quantity < 0 {
            return Err(AppError::validation("Minimum quantity cannot be negative"));
        }

        let item = self.item_repo.create(&data).await?;
        info!(item_id = item.id, name = %item.name, "Item created");
        Ok(item)
    }

    /// Updates an item's catalog fields.
    pub async fn update_item(&self, data: UpdateItem) -> Result<Item, AppError> {
        if let Some(name) = &data.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Item name cannot be empty"));
            }
        }
        if matches!(data.quantity, Some(q) if q < 0) {
            return Err(AppError::validation("Quantity cannot be negative"));
        }
        if matches!(data.min_quantity, Some(q) if q < 0) {
            return Err(AppError::validation("Minimum quantity cannot be negative"));
        }

        let item = self.item_repo.update(&data).await?;
        info!(item_id = item.id, "Item updated");
        Ok(item)
    }

    /// Deletes an item.
    pub async fn delete_item(&self, id: i64) -> Result<(), AppError> {
        let deleted = self.item_repo.delete(id).await?;
        if !deleted {
            return Err(AppError::not_found(format!("Item {id} not found")));
        }
        info!(item_id = id, "Item deleted");
        Ok(())
    }
}
