mod config;
mod errors;
mod export;
mod form;
mod models;
mod preview;
mod render;
mod routes;
mod state;
mod storage;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::render::Labels;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::{CvStore, InMemoryCvStore, RestCvStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV Studio API v{}", env!("CARGO_PKG_VERSION"));

    let store = build_store(&config)?;

    let state = AppState {
        store,
        labels: Arc::new(Labels::default()),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the client domain is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// REST store when `STORAGE_URL` is set, otherwise a process-local one.
fn build_store(config: &Config) -> Result<Arc<dyn CvStore>> {
    match (&config.storage_url, &config.storage_api_key) {
        (Some(url), Some(key)) => {
            let store = RestCvStore::new(url, key.clone())?;
            info!("Storage client initialized ({url})");
            Ok(Arc::new(store))
        }
        _ => {
            warn!(
                "STORAGE_URL not set; using in-memory store ({} signup credits)",
                config.signup_credits
            );
            Ok(Arc::new(InMemoryCvStore::new(config.signup_credits)))
        }
    }
}
