//! Genre browser (gbr-web) - Main entry point
//!
//! Serves the genre categories page, subgenre track pages and the
//! `/api/genres` JSON endpoint backed by the remote music catalog.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use gbr_common::config::load_config;
use gbr_web::services::{DeezerClient, GenreCache};
use gbr_web::{build_router, AppState};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for gbr-web
#[derive(Parser, Debug)]
#[command(name = "gbr-web")]
#[command(about = "Genre browser web service")]
#[command(version)]
struct Args {
    /// Path to TOML config file
    #[arg(short, long, env = "GBR_CONFIG")]
    config: Option<PathBuf>,

    /// Port to listen on (overrides config)
    #[arg(short, long, env = "GBR_PORT")]
    port: Option<u16>,

    /// Interface to bind (overrides config)
    #[arg(short, long, env = "GBR_BIND")]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(args.config.as_deref()).context("Failed to load configuration")?;

    // RUST_LOG wins over the configured level
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "gbr_web={level},gbr_common={level},tower_http={level}",
                    level = config.logging.level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting genre browser (gbr-web) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let catalog = DeezerClient::new(
        config.remote.base_url.clone(),
        Duration::from_secs(config.remote.timeout_secs),
    )
    .context("Failed to create remote catalog client")?;
    info!("Remote catalog: {}", catalog.base_url());

    let genre_cache = GenreCache::new(Duration::from_secs(config.remote.genre_cache_secs));
    info!("Genre cache TTL: {}s", genre_cache.ttl().as_secs());

    let state = AppState::new(Arc::new(catalog), genre_cache);
    let app = build_router(state);

    let bind = args.bind.unwrap_or(config.bind_address);
    let port = args.port.unwrap_or(config.port);
    let listener = tokio::net::TcpListener::bind((bind.as_str(), port))
        .await
        .with_context(|| format!("Failed to bind to {}:{}", bind, port))?;
    let addr: SocketAddr = listener.local_addr().context("Failed to read listen address")?;
    info!("gbr-web listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
