//! Low-stock alert scan.

use std::sync::Arc;

use tracing::info;

use gudang_core::error::AppError;
use gudang_core::types::pagination::PageRequest;
use gudang_database::repositories::item::ItemRepository;
use gudang_database::repositories::user::UserRepository;
use gudang_entity::item::ItemStatus;
use gudang_entity::notification::NotificationEvent;
use gudang_entity::user::UserRole;
use gudang_service::notification::NotificationService;

/// Page size used when walking the low-stock listing.
const SCAN_PAGE_SIZE: u64 = 100;

/// Scans the catalog and alerts managers about low and empty stock.
#[derive(Clone)]
pub struct LowStockScanHandler {
    /// Item repository.
    item_repo: Arc<ItemRepository>,
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Notification service.
    notifications: Arc<NotificationService>,
}

impl LowStockScanHandler {
    /// Creates a new low-stock scan handler.
    pub fn new(
        item_repo: Arc<ItemRepository>,
        user_repo: Arc<UserRepository>,
        notifications: Arc<NotificationService>,
    ) -> Self {
        Self {
            item_repo,
            user_repo,
            notifications,
        }
    }

    /// Notify every manager and admin about items at or below threshold.
    ///
    /// One notification per item and recipient, deduplicated against
    /// unread notifications by `notify_once`.
    pub async fn scan(&self) -> Result<(), AppError> {
        let managers = self.user_repo.find_by_min_role(UserRole::Manager).await?;
        if managers.is_empty() {
            info!("Low-stock scan skipped: no managers to notify");
            return Ok(());
        }

        let mut page = PageRequest::new(1, SCAN_PAGE_SIZE);
        let mut notified = 0usize;
        let mut scanned = 0usize;

        loop {
            let batch = self.item_repo.find_low_stock(&page).await?;
            scanned += batch.items.len();

            for item in &batch.items {
                let (event, message) = match item.current_status() {
                    ItemStatus::OutOfStock => (
                        NotificationEvent::ItemOutOfStock,
                        format!("Item '{}' is out of stock", item.name),
                    ),
                    _ => (
                        NotificationEvent::ItemLowStock,
                        format!(
                            "Item '{}' is low on stock ({} left, threshold {})",
                            item.name, item.quantity, item.min_quantity
                        ),
                    ),
                };

                for manager in &managers {
                    if self
                        .notifications
                        .notify_once(manager.id, event, message.clone(), Some(item.id))
                        .await?
                    {
                        notified += 1;
                    }
                }
            }

            if !batch.has_next {
                break;
            }
            page = PageRequest::new(page.page + 1, SCAN_PAGE_SIZE);
        }

        info!(scanned, notified, "Low-stock scan complete");
        Ok(())
    }
}
