mod advisor;
mod artifacts;
mod config;
mod errors;
mod features;
mod models;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::advisor::heuristics::HeuristicEngine;
use crate::advisor::CareerAdvisor;
use crate::artifacts::ArtifactRegistry;
use crate::config::Config;
use crate::features::FeatureBuilder;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting PivotPath API v{}", env!("CARGO_PKG_VERSION"));

    // One-time artifact load; every artifact is optional
    let registry = Arc::new(ArtifactRegistry::load_from_dir(&config.asset_dir));

    // Content tables are verified here, before serving any request
    let advisor = CareerAdvisor::new(registry, FeatureBuilder::default(), HeuristicEngine::builtin())
        .context("Role content tables failed verification")?;
    info!(
        "Content tables ready for {} roles",
        advisor.form_options().roles.len()
    );

    let state = AppState {
        advisor: Arc::new(advisor),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
