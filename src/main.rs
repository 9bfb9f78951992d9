//! Shiptrack server — logistics tracking backend.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use shiptrack_core::config::AppConfig;
use shiptrack_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            // Startup configuration errors are fatal. A missing signing
            // key in particular must never fall back to a default.
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("SHIPTRACK_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
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
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Shiptrack v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let db_pool = shiptrack_database::connection::create_pool(&config.database).await?;

    tracing::info!("Running database migrations...");
    shiptrack_database::migration::run_migrations(&db_pool).await?;
    tracing::info!("Database migrations complete");

    // ── Step 2: Repositories ─────────────────────────────────────
    let account_repo = Arc::new(
        shiptrack_database::repositories::account::AccountRepository::new(db_pool.clone()),
    );
    let package_repo = Arc::new(
        shiptrack_database::repositories::package::PackageRepository::new(db_pool.clone()),
    );
    let route_repo = Arc::new(shiptrack_database::repositories::route::RouteRepository::new(
        db_pool.clone(),
    ));

    // ── Step 3: Authentication system ────────────────────────────
    tracing::info!("Initializing authentication system...");
    let password_hasher = shiptrack_auth::PasswordHasher::new();
    let token_codec = Arc::new(shiptrack_auth::TokenCodec::new(&config.auth)?);
    let auth_service = Arc::new(shiptrack_auth::AuthService::new(
        account_repo,
        password_hasher,
        Arc::clone(&token_codec),
        &config.auth,
    ));

    // ── Step 4: Build and start HTTP server ──────────────────────
    tracing::info!(
        "Starting HTTP server on {}:{}...",
        config.server.host,
        config.server.port
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);

    let app_state = shiptrack_api::AppState {
        config: Arc::new(config),
        auth_service,
        token_codec,
        package_store: package_repo,
        route_store: route_repo,
    };

    let app = shiptrack_api::build_router(app_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Shiptrack server listening on {}", addr);

    // ── Step 5: Graceful shutdown ────────────────────────────────
    let server = axum::serve(listener, app).with_graceful_shutdown(async {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("Shiptrack server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
