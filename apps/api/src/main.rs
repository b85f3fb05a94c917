//! # Receipt Rewards API Server
//!
//! Binary entry point: loads configuration, initializes tracing, builds the
//! router over a fresh in-memory store, and serves until shutdown.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  load config ──► init tracing ──► bind ──► serve ──► graceful shutdown │
//! │                                                                         │
//! │  The store dies with the process: persistence is out of scope.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;

use rewards_api::config::ApiConfig;
use rewards_api::routes;
use rewards_store::ReceiptStore;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration first: it decides the log level
    let config = ApiConfig::load()?;

    // Initialize tracing
    FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_target(true)
        .init();

    info!(port = config.port, "starting receipt rewards API");

    // One store for the life of the process, injected into the router
    let store = ReceiptStore::new();
    let app = routes::router(store);

    // Bind and serve
    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received, starting graceful shutdown...");
}
