//! Request creation and the approval workflow.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use gudang_core::error::AppError;
use gudang_core::types::pagination::{PageRequest, PageResponse};
use gudang_database::repositories::request::RequestRepository;
use gudang_database::repositories::user::UserRepository;
use gudang_entity::notification::NotificationEvent;
use gudang_entity::request::model::{CreateRequest, Request, RequestWithItems};
use gudang_entity::request::status::RequestStatus;

use crate::notification::NotificationService;

/// Manages stock requests and their status transitions.
#[derive(Debug, Clone)]
pub struct RequestService {
    /// Request repository.
    request_repo: Arc<RequestRepository>,
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Notification service, invoked after successful commits.
    notifications: Arc<NotificationService>,
}

impl RequestService {
    /// Creates a new request service.
    pub fn new(
        request_repo: Arc<RequestRepository>,
        user_repo: Arc<UserRepository>,
        notifications: Arc<NotificationService>,
    ) -> Self {
        Self {
            request_repo,
            user_repo,
            notifications,
        }
    }

    /// Gets a request with its lines.
    pub async fn get_request(&self, id: Uuid) -> Result<RequestWithItems, AppError> {
        self.request_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Request {id} not found")))
    }

    /// Lists requests, optionally filtered by status.
    pub async fn list_requests(
        &self,
        status: Option<RequestStatus>,
        page: PageRequest,
    ) -> Result<PageResponse<Request>, AppError> {
        self.request_repo.find_all(status, &page).await
    }

    /// Lists requests filed by a user.
    pub async fn list_by_requester(
        &self,
        requester_id: Uuid,
        page: PageRequest,
    ) -> Result<PageResponse<Request>, AppError> {
        self.request_repo.find_by_requester(requester_id, &page).await
    }

    /// Creates a request with its lines.
    ///
    /// Validation runs before the transaction: the requester must exist,
    /// there must be at least one line, and every line quantity must be
    /// positive.
    pub async fn create_request(&self, data: CreateRequest) -> Result<RequestWithItems, AppError> {
        if data.project_name.trim().is_empty() {
            return Err(AppError::validation("Project name is required"));
        }
        if data.items.is_empty() {
            return Err(AppError::validation("A request needs at least one item"));
        }
        let mut seen = std::collections::HashSet::new();
        for line in &data.items {
            if line.quantity <= 0 {
                return Err(AppError::validation(format!(
                    "Requested quantity for item {} must be positive",
                    line.item_id
                )));
            }
            if !seen.insert(line.item_id) {
                return Err(AppError::validation(format!(
                    "Item {} appears more than once in the request",
                    line.item_id
                )));
            }
        }

        self.user_repo
            .find_by_id(data.requester_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("User {} not found", data.requester_id))
            })?;

        self.request_repo.create(&data).await
    }

    /// Transitions a request's status (the approval workflow).
    ///
    /// The repository runs the transition and any stock deduction in one
    /// transaction. The requester is notified only after that transaction
    /// has committed; a notification failure cannot undo the transition.
    pub async fn update_status(
        &self,
        request_id: Uuid,
        new_status: RequestStatus,
    ) -> Result<RequestWithItems, AppError> {
        let updated = self.request_repo.update_status(request_id, new_status).await?;

        if let Some(event) = Self::event_for(new_status) {
            let message = format!(
                "Your request '{}' is now {}",
                updated.request.project_name, new_status
            );
            self.notifications
                .notify_best_effort(updated.request.requester_id, event, message, None)
                .await;
        }

        info!(request_id = %request_id, status = %new_status, "Request transition complete");

        Ok(updated)
    }

    /// The notification event matching a transition target, if any.
    fn event_for(status: RequestStatus) -> Option<NotificationEvent> {
        match status {
            RequestStatus::Approved => Some(NotificationEvent::RequestApproved),
            RequestStatus::Rejected => Some(NotificationEvent::RequestRejected),
            RequestStatus::Fulfilled => Some(NotificationEvent::RequestFulfilled),
            RequestStatus::OutOfStock => Some(NotificationEvent::RequestOutOfStock),
            RequestStatus::Pending => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_mapping() {
        assert_eq!(
            RequestService::event_for(RequestStatus::Approved),
            Some(NotificationEvent::RequestApproved)
        );
        assert_eq!(RequestService::event_for(RequestStatus::Pending), None);
    }
}
