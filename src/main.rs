use anyhow::Context;
use hand_landmark_server::{
    api::build_router,
    config::Config,
    hands::{HandsState, LandmarkStore},
    producer::{build_source, run_producer},
    telemetry::init_tracing,
};
use std::sync::Arc;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config_path = std::env::var("HANDS_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path))?;

    init_tracing(&config.logging)?;

    // The only state shared between the producer and the query service
    let store = Arc::new(LandmarkStore::new());

    match build_source(&config.producer).await? {
        Some(source) => {
            let producer_store = store.clone();
            tokio::spawn(async move {
                match run_producer(source, producer_store).await {
                    Ok(_) => info!("Producer stopped; serving last known frames"),
                    Err(e) => error!("Producer stopped with error: {}", e),
                }
            });
        }
        None => warn!("No frame source configured; hands will only appear if published externally"),
    }

    let router = build_router(HandsState::new(store));

    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!("Serving hand landmarks on http://{}", address);
    info!("   - GET /hands/left");
    info!("   - GET /hands/right");
    info!("   - GET /metrics");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
