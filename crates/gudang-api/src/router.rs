//! Route definitions for the Gudang Mitra HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, patch, post, put},
};
use std::time::Duration;

use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes;
    let request_timeout = Duration::from_secs(state.config.server.request_timeout_seconds);

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(category_routes())
        .merge(item_routes())
        .merge(request_routes())
        .merge(loan_routes())
        .merge(notification_routes())
        .merge(dashboard_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints
fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(handlers::auth::login))
}

/// User endpoints
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handlers::user::list_users))
        .route("/users", post(handlers::user::create_user))
        .route("/users/{id}", get(handlers::user::get_user))
}

/// Category endpoints
fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(handlers::category::list_categories))
        .route("/categories", post(handlers::category::create_category))
}

/// Item catalog endpoints
fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/items", get(handlers::item::list_items))
        .route("/items", post(handlers::item::create_item))
        .route("/items/low-stock", get(handlers::item::list_low_stock))
        .route("/items/{id}", get(handlers::item::get_item))
        .route("/items/{id}", put(handlers::item::update_item))
        .route("/items/{id}", delete(handlers::item::delete_item))
}

/// Stock request endpoints
fn request_routes() -> Router<AppState> {
    Router::new()
        .route("/requests", get(handlers::request::list_requests))
        .route("/requests", post(handlers::request::create_request))
        .route("/requests/{id}", get(handlers::request::get_request))
        .route(
            "/requests/{id}/status",
            patch(handlers::request::update_status),
        )
        .route(
            "/requests/user/{user_id}",
            get(handlers::request::list_by_requester),
        )
}

/// Loan endpoints
fn loan_routes() -> Router<AppState> {
    Router::new()
        .route("/loans", get(handlers::loan::list_loans))
        .route("/loans/overdue", get(handlers::loan::list_overdue))
        .route("/loans/borrow", post(handlers::loan::borrow))
        .route("/loans/return", post(handlers::loan::return_loan))
        .route("/loans/{id}", get(handlers::loan::get_loan))
        .route("/loans/user/{user_id}", get(handlers::loan::list_by_user))
}

/// Notification endpoints
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications",
            get(handlers::notification::list_notifications),
        )
        .route(
            "/notifications/unread-count",
            get(handlers::notification::unread_count),
        )
        .route(
            "/notifications/read-all",
            put(handlers::notification::mark_all_read),
        )
        .route(
            "/notifications/{id}/read",
            put(handlers::notification::mark_read),
        )
        .route(
            "/notifications/{id}",
            delete(handlers::notification::delete_notification),
        )
}

/// Dashboard endpoints
fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/dashboard/stats", get(handlers::dashboard::stats))
}

/// Health check endpoints
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}
