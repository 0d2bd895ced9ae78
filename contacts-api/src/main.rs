//! # Contacts API Server
//!
//! HTTP server for managing organization contact records: create, retrieve,
//! edit, and soft-delete operations backed by PostgreSQL through the
//! generic repository in `contacts-data`.
//!
//! ## Usage
//!
//! ```bash
//! DATABASE_URL=postgresql://localhost/contacts cargo run -p contacts-api
//! ```

use contacts_api::{
    app::{build_router, AppState},
    config::Config,
};
use contacts_data::db::pool::{close_pool, create_pool, PoolConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "contacts_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Contacts API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;

    let pool = create_pool(PoolConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        ..Default::default()
    })
    .await?;

    let state = AppState::new(pool.clone(), config.clone());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    close_pool(pool).await;

    Ok(())
}

/// Resolves when the process receives a shutdown signal
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received, exiting...");
    } else {
        tracing::error!("Failed to listen for shutdown signal");
    }
}
