//! Recommendation service binary.
//!
//! Connects (lazily) to the product catalog, then serves
//! `hipstershop.RecommendationService` until interrupted.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tonic::transport::Server;
use tracing::{error, info};

use catalog_client::CatalogClient;
use selector::RecommendationSelector;
use server::{RecommendationGrpcService, ServerConfig, handler_for};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::parse();
    info!("Starting recommendation service: {:?}", config);

    let catalog = CatalogClient::connect_lazy(config.catalog_addr.clone())
        .context("Invalid product catalog address")?;
    let selector = RecommendationSelector::new(Arc::new(catalog));
    let handler = handler_for(&config.function, selector).context("Failed to register handler")?;

    info!("Serving {} on {}", config.function, config.listen);
    Server::builder()
        .add_service(RecommendationGrpcService::new(handler).into_server())
        .serve_with_shutdown(config.listen, async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Shutdown signal received"),
                Err(e) => error!("Failed to listen for shutdown signal: {}", e),
            }
        })
        .await
        .context("gRPC server failed")?;

    Ok(())
}
