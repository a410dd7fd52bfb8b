use crate::app_config::AppConfig;
use crate::location::{LastKnownPosition, LocationClient, LocationService, new_client};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

mod api;
mod app_config;
mod domain;
mod location;
mod position_deserializer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let client = new_client(&config)?;
    let last_known = Arc::new(LastKnownPosition::new());
    let location_client: Arc<dyn LocationService> = Arc::new(LocationClient::new(client, &config, last_known));
    info!(
        url = config.location_api().url(),
        on_exhausted = ?config.location_api().on_exhausted(),
        "✅  Initialized location client"
    );

    let listener = TcpListener::bind(config.server().address()).await?;
    info!("🔥 {} is up and running on {}", env!("CARGO_PKG_NAME"), listener.local_addr()?);

    axum::serve(listener, api::router(location_client))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 {} stopped", env!("CARGO_PKG_NAME"));
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("⚠️ Unable to listen for the shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
