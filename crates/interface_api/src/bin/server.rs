//! La Liga Tracker - API Server Binary
//!
//! This binary starts the HTTP API server for the match tracker.
//!
//! # Usage
//!
//! ```bash
//! DB_USER=laliga DB_PASSWORD=secret DB_NAME=laliga cargo run --bin laliga-tracker
//! ```
//!
//! # Environment Variables
//!
//! * `DB_HOST` / `DB_PORT` - PostgreSQL address (default: localhost:5432)
//! * `DB_USER`, `DB_PASSWORD`, `DB_NAME` - Credentials and database (required)
//! * `DB_MAX_ATTEMPTS`, `DB_RETRY_INTERVAL_SECS` - Startup retry (default: 5, 3)
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_LOG_LEVEL` - Log level when `RUST_LOG` is unset (default: info)
//! * `API_LOG_FORMAT` - `pretty` or `json` (default: pretty)
//! * `API_STATIC_INDEX` - Page served at `/` (default: ./LaLigaTracker.html)

use std::sync::Arc;

use anyhow::Context;
use domain_match::MatchService;
use infra_db::{initialize, DatabaseConfig, MatchRepository};
use interface_api::config::{ApiConfig, LogFormat};
use interface_api::create_router;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration, opens the database pool with
/// bounded retry, and starts the HTTP server. The process exits with an
/// error if the database cannot be reached within the retry budget.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("invalid API_* configuration")?;
    init_tracing(&config);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "Starting La Liga tracker"
    );

    let db_config = DatabaseConfig::from_env().context("invalid DB_* configuration")?;
    let pool = initialize(&db_config)
        .await
        .context("could not connect to the database")?;

    let service = MatchService::new(Arc::new(MatchRepository::new(pool.clone())));
    let addr = config.server_addr();
    let app = create_router(service, config);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("could not bind {addr}"))?;
    tracing::info!(%addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` takes precedence over `API_LOG_LEVEL`.
fn init_tracing(config: &ApiConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init(),
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// In-flight requests are allowed to complete before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
