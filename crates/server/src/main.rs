//! bookshelf server entry point.
//!
//! Loads configuration, builds the catalog client and cache, and serves the
//! HTTP API until interrupted.

use std::sync::Arc;

use anyhow::Result;
use bookshelf_client::{CatalogClient, CatalogConfig};
use bookshelf_core::AppConfig;
use tracing_subscriber::EnvFilter;

mod handler;
mod routes;

const DEFAULT_LOG_FILTER: &str = "bookshelf=info,bookshelf_core=info,bookshelf_client=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .json()
        .init();

    let config = AppConfig::load()?;
    let client = CatalogClient::new(CatalogConfig::from(&config))?;

    let state = handler::AppState::new(Arc::new(client), config.search_defaults());
    let app = handler::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!(
        addr = %config.bind_addr,
        catalog = %config.catalog_url,
        default_query = %config.default_query,
        "Starting bookshelf server"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
