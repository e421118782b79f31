//! HTTP server initialization and runtime setup.
//!
//! Wires the stores, the rate-limit registry and its sweeper, starts the
//! Axum server with peer-address info for the limiter, and coordinates
//! graceful shutdown: stop accepting, drain in-flight requests, cancel the
//! sweeper, then exit.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::infrastructure::memory::{MemoryFormStore, MemoryPermissionStore, MemoryUserStore};
use crate::registry::{ClientRegistry, SWEEP_INTERVAL};
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails while
/// running.
pub async fn run(config: Config) -> Result<()> {
    let config = Arc::new(config);

    let registry = Arc::new(ClientRegistry::new(
        config.limiter_rps,
        config.limiter_burst,
    ));
    let shutdown = CancellationToken::new();
    let sweeper = registry
        .clone()
        .spawn_sweeper(SWEEP_INTERVAL, shutdown.clone());

    let state = AppState::new(
        config.clone(),
        registry,
        Arc::new(MemoryUserStore::new()),
        Arc::new(MemoryPermissionStore::new()),
        Arc::new(MemoryFormStore::new()),
    );

    let app = app_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, env = %config.env, "starting server");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("in-flight requests drained, stopping background tasks");
    shutdown.cancel();
    sweeper.await?;
    tracing::info!("server stopped");

    Ok(())
}

/// Resolves when the process receives SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    tracing::info!("shutdown signal received");
}
