//! Serve command - Starts the HTTP server.

use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Settings;
use crate::errors::{AppError, AppResult};

/// Execute the serve command
pub async fn execute(args: ServeArgs, settings: Arc<Settings>) -> AppResult<()> {
    tracing::info!("Starting {}...", settings.app_name);

    // Create application state around the immutable settings snapshot
    let app_state = AppState::new(Arc::clone(&settings));

    // Build router
    let app = create_router(app_state);

    // CLI flags override the configured bind address
    let host = args.host.unwrap_or_else(|| settings.api_host.clone());
    let port = args.port.unwrap_or(settings.api_port);

    // Start server
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}
