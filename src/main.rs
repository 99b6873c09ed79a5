//! Gudang Mitra Server — Warehouse Inventory & Request Management
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tokio::sync::watch;
use tracing;
use tracing_subscriber::{EnvFilter, fmt};

use gudang_core::config::AppConfig;
use gudang_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("GUDANG_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Gudang Mitra v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db = gudang_database::DatabasePool::connect(&config.database).await?;
    let db_pool = db.pool().clone();

    gudang_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Initialize repositories ──────────────────────────
    let user_repo = Arc::new(gudang_database::repositories::user::UserRepository::new(
        db_pool.clone(),
    ));
    let category_repo = Arc::new(
        gudang_database::repositories::category::CategoryRepository::new(db_pool.clone()),
    );
    let item_repo = Arc::new(gudang_database::repositories::item::ItemRepository::new(
        db_pool.clone(),
    ));
    let request_repo = Arc::new(
        gudang_database::repositories::request::RequestRepository::new(db_pool.clone()),
    );
    let loan_repo = Arc::new(gudang_database::repositories::loan::LoanRepository::new(
        db_pool.clone(),
    ));
    let notification_repo = Arc::new(
        gudang_database::repositories::notification::NotificationRepository::new(db_pool.clone()),
    );
    let dashboard_repo = Arc::new(
        gudang_database::repositories::dashboard::DashboardRepository::new(db_pool.clone()),
    );

    // ── Step 3: Initialize auth ──────────────────────────────────
    let password_hasher = Arc::new(gudang_auth::PasswordHasher::new());
    let verifier = Arc::new(gudang_auth::CredentialVerifier::new(
        gudang_auth::PasswordHasher::new(),
        config.auth.allow_legacy_credentials,
    ));

    // ── Step 4: Initialize services ──────────────────────────────
    let notification_service = Arc::new(gudang_service::NotificationService::new(Arc::clone(
        &notification_repo,
    )));
    let auth_service = Arc::new(gudang_service::AuthService::new(
        Arc::clone(&user_repo),
        Arc::clone(&verifier),
    ));
    let user_service = Arc::new(gudang_service::UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        config.auth.clone(),
    ));
    let category_service = Arc::new(gudang_service::CategoryService::new(Arc::clone(
        &category_repo,
    )));
    let item_service = Arc::new(gudang_service::ItemService::new(Arc::clone(&item_repo)));
    let request_service = Arc::new(gudang_service::RequestService::new(
        Arc::clone(&request_repo),
        Arc::clone(&user_repo),
        Arc::clone(&notification_service),
    ));
    let loan_service = Arc::new(gudang_service::LoanService::new(
        Arc::clone(&loan_repo),
        Arc::clone(&user_repo),
        config.loans.clone(),
    ));
    let dashboard_service = Arc::new(gudang_service::DashboardService::new(Arc::clone(
        &dashboard_repo,
    )));

    // ── Step 5: Shutdown channel & worker ────────────────────────
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    let mut scheduler = if config.worker.enabled {
        let loan_scan = Arc::new(gudang_worker::jobs::loans::LoanScanHandler::new(
            Arc::clone(&loan_repo),
            Arc::clone(&notification_service),
            config.loans.clone(),
        ));
        let low_stock_scan = Arc::new(gudang_worker::jobs::stock::LowStockScanHandler::new(
            Arc::clone(&item_repo),
            Arc::clone(&user_repo),
            Arc::clone(&notification_service),
        ));

        let scheduler = gudang_worker::MaintenanceScheduler::new(
            config.worker.clone(),
            loan_scan,
            low_stock_scan,
        )
        .await?;
        scheduler.register_default_tasks().await?;
        scheduler.start().await?;
        Some(scheduler)
    } else {
        tracing::info!("Background worker disabled");
        None
    };

    // ── Step 6: Build and start HTTP server ──────────────────────
    let app_state = gudang_api::AppState {
        config: Arc::new(config.clone()),
        db_pool: db_pool.clone(),
        user_repo,
        category_repo,
        item_repo,
        request_repo,
        loan_repo,
        notification_repo,
        dashboard_repo,
        auth_service,
        user_service,
        category_service,
        item_service,
        request_service,
        loan_service,
        notification_service,
        dashboard_service,
    };

    let app = gudang_api::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Gudang Mitra server listening on {addr}");

    // ── Step 7: Graceful shutdown ────────────────────────────────
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
        let _ = shutdown_tx.send(true);
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    // ── Step 8: Stop background tasks ────────────────────────────
    let _ = shutdown_rx.changed().await;
    if let Some(scheduler) = scheduler.as_mut() {
        scheduler.shutdown().await?;
    }
    db.close().await;

    tracing::info!("Gudang Mitra server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
