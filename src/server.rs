//! Server startup and shutdown logic.
//!
//! This module contains the `run_server` function which handles:
//! - Database connection and migrations
//! - Application state creation
//! - Router creation
//! - Server binding and graceful shutdown

use crate::auth::AuthService;
use crate::config::Config;
use crate::db::Repository;
use crate::error::{AppError, AppResult};
use crate::routes;
use crate::state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Run the web server with the given configuration.
///
/// # Errors
///
/// This function will return an error if:
/// - Database connection fails
/// - Migration fails
/// - Server binding fails
/// - Server runtime error occurs
pub async fn run_server(config: Config, should_migrate: bool) -> AppResult<()> {
    info!("Starting contacts-api server...");

    info!("Connecting to database...");
    let repository = Repository::connect(&config.database).await?;
    info!("Database connected");

    if should_migrate {
        info!("Running database migrations...");
        repository.run_migrations().await?;
        info!("Migrations completed successfully");
    }

    let auth_service = AuthService::new(
        config.auth.jwt_secret.clone(),
        config.auth.jwt_expiration_minutes,
    );

    let state = Arc::new(AppState::new(
        repository,
        auth_service,
        config.server.environment.clone(),
    ));

    let app = routes::create_router(state, &config.cors, &config.http);

    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to bind to address {}: {}", addr, e)))?;

    info!("Server running on {}", addr);
    info!("Environment: {}", config.server.environment);

    axum::serve(listener, app)
        .with_graceful_shutdown(create_shutdown_signal())
        .await
        .map_err(|e| AppError::Internal(format!("Server error: {}", e)))?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves when Ctrl+C (or SIGTERM on Unix) is received.
///
/// # Panics
///
/// Panics if signal handler installation fails; without it the process could
/// never shut down gracefully.
async fn create_shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(unix)]
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    #[cfg(not(unix))]
    ctrl_c.await;

    info!("Shutdown signal received");
}
