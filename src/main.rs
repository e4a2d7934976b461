//! Student Registry - CRUD service for student records
//!
//! Serves the student REST API with a cached listing endpoint.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use student_registry::api::{create_router, AppState};
use student_registry::cache::{CacheStore, SystemClock};
use student_registry::store::SqliteStudentStore;
use student_registry::{Config, StudentService};

/// Main entry point for the student registry server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Open the SQLite store and create the schema
/// 4. Build the listing cache and the student service
/// 5. Start HTTP server on configured port
/// 6. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "student_registry=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Student Registry");

    let config = Config::from_env();
    info!(
        "Configuration loaded: database={}, cache_max_entries={}, cache_ttl={}s, port={}",
        config.database_url, config.cache_max_entries, config.cache_ttl, config.server_port
    );

    let store = SqliteStudentStore::connect(&config.database_url, config.db_max_connections)
        .await
        .context("failed to open student database")?;

    let cache = CacheStore::new(
        config.cache_max_entries,
        config.cache_ttl_duration(),
        Arc::new(SystemClock),
    );
    let state = AppState::new(StudentService::new(Arc::new(store), cache));
    info!("Student service initialized");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
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
}
