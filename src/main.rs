//! Pokedex - A Pokemon encyclopedia service
//!
//! Serves a searchable roster and per-Pokemon details aggregated from PokeAPI.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::api::{create_router, AppState};
use pokedex::client::HttpTransport;
use pokedex::tasks::{spawn_cleanup_task, spawn_roster_load};
use pokedex::Config;

/// Main entry point for the Pokedex server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Build transport, response cache, fetcher and state store
/// 4. Start the cache sweep task (if enabled) and the initial roster load
/// 5. Serve the HTTP API until SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Pokedex server");

    let config = Config::from_env();
    info!(
        "Configuration loaded: base_url={}, roster_limit={}, batch_size={}, request_delay={}ms, cache_ttl={}s, port={}",
        config.base_url,
        config.roster_limit,
        config.batch_size,
        config.request_delay_ms,
        config.cache_ttl,
        config.server_port
    );

    let transport = HttpTransport::new().context("creating HTTP transport")?;
    let state = AppState::from_config(&config, Arc::new(transport));

    let mut background = Vec::new();
    if config.cleanup_interval > 0 {
        background.push(spawn_cleanup_task(state.cache(), config.cleanup_interval));
        info!("Cache sweep task started");
    }
    if config.load_on_startup {
        background.push(spawn_roster_load(state.service.clone()));
    }

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(background))
        .await
        .context("serving HTTP")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for Ctrl+C or SIGTERM, then aborts the background tasks.
async fn shutdown_signal(background: Vec<JoinHandle<()>>) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    for handle in background {
        handle.abort();
    }
    warn!("Background tasks aborted");
}
