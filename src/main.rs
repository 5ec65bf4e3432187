use anyhow::Context;
use product_api::infrastructure::database;
use product_api::lifecycle::shutdown_signal;
use product_api::modules::product::SeaOrmProductRepository;
use product_api::telemetry::init_tracing;
use product_api::{AppConfig, AppState, StorageConfig, router};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.log_level);
    if let Some(path) = &config.env_file {
        tracing::debug!("loaded environment from {}", path.display());
    }

    tracing::info!("🚀 Starting Product Management API...");

    let (state, db) = match &config.storage {
        StorageConfig::InMemory => {
            tracing::warn!("Using in-memory storage; data is lost on shutdown");
            (AppState::in_memory(), None)
        }
        StorageConfig::Database {
            url,
            max_connections,
        } => {
            let db = database::connect(url, *max_connections)
                .await
                .context("Failed to connect to the database")?;
            let repository = SeaOrmProductRepository::new(db.clone());
            (AppState::new(Arc::new(repository)), Some(db))
        }
    };

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("✅ Server running on http://{}", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("🛑 Initiating graceful shutdown...");
        })
        .await
        .context("Server error")?;

    if let Some(db) = db {
        tracing::info!("📦 Database: Closing connection pool...");
        db.close().await.context("Failed to close the database")?;
    }

    tracing::info!("👋 Server stopped");
    Ok(())
}
