// weather-tools-server/src/main.rs
use std::{error::Error, sync::Arc};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use weather_tools_server::{create_router, AppState, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::load()?;
    let addr = config.socket_addr()?;

    let app_state = Arc::new(AppState::from_config(&config)?);
    let app_router = create_router(app_state);

    info!("Starting weather tools server on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app_router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down successfully");
    Ok(())
}

// --- Graceful Shutdown Signal Handler ---
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received...");
}
