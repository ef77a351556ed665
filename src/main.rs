//! Resource server entry point.
//!
//! Loads configuration, installs logging, starts the stores and serves HTTP
//! until Ctrl+C.

use anyhow::{Context, Result};
use tracing::info;

use resource_server::api::{create_router, AppState};
use resource_server::config::Config;
use resource_server::lifecycle::{setup_tracing, ResourceSystem};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();
    setup_tracing(&config.logging.level);

    let addr = config.server.address();

    let system = ResourceSystem::new(&config.store);
    let app = create_router(AppState::from_system(&system), config.cors_enabled);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    let cors_status = if config.cors_enabled { "enabled" } else { "disabled" };
    info!("Ready - listening on {} (CORS {})", addr, cors_status);
    info!("  → Health: GET /health");

    // The router (and its client clones) is dropped when serve returns.
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    system.shutdown().await.map_err(anyhow::Error::msg)?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
