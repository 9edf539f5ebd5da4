mod adapter;
mod core;
mod error;

use tokio::net::TcpListener;
use tracing::info;

use crate::adapter::config::AppConfig;
use crate::adapter::init::AppInitializer;
use crate::adapter::logging;
use crate::adapter::web::create_router::create_router;
use crate::error::ApplicationError;

#[tokio::main]
async fn main() -> Result<(), ApplicationError> {
    let config = AppConfig::load()?;
    logging::init(config.log_json())?;

    let state = AppInitializer::initialize(&config).await?;
    let app = create_router(state);

    let listener = TcpListener::bind(config.bind_address())
        .await
        .map_err(|e| ApplicationError::ServerError(e.to_string()))?;
    info!(address = %config.bind_address(), "AppUser service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApplicationError::ServerError(e.to_string()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        return std::future::pending().await;
    }
    info!("shutting down");
}
