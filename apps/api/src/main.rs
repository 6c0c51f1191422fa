//! billing-api server entry point.
//!
//! Startup order: tracing, configuration, database (fatal on failure - the
//! process must never serve requests without a verified store), router,
//! serve until a shutdown signal arrives.

use std::net::SocketAddr;

use axum::http::HeaderValue;
use tracing::info;
use tracing_subscriber::EnvFilter;

use billing_api::{create_router, ApiConfig, AppState};
use billing_db::{Database, DbConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting billing API server...");

    let config = ApiConfig::load()?;
    info!(
        port = config.port,
        database = %config.database_path,
        origin = %config.cors_origin,
        "Configuration loaded"
    );

    // Fatal if the store cannot be opened or does not answer the liveness
    // check. Acceptable only here, never mid-request.
    let db = Database::new(DbConfig::new(&config.database_path)).await?;
    info!("Connected to SQLite");

    let allowed_origin: HeaderValue = config.cors_origin.parse()?;
    let app = create_router(AppState::new(db.clone()), allowed_origin);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("Server shutdown complete");
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

    info!("Shutdown signal received, starting graceful shutdown...");
}
