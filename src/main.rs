use anyhow::Result;
use dotenv::dotenv;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use emodak_space::api;
use emodak_space::config::{Config, LogFormat, StoreBackend};
use emodak_space::db::init_database;
use emodak_space::service::ProfileService;
use emodak_space::store::{MemoryStore, ProfileStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if present
    dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info,emodak_space=debug".into()),
    );
    match config.logging.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
    }
    info!("Initialized configuration");

    // Initialize the profile store
    let store: Arc<dyn ProfileStore> = match config.database.backend {
        StoreBackend::Postgres => {
            let db = init_database(&config.database).await?;
            info!("Connected to database");
            Arc::new(db)
        }
        StoreBackend::Memory => {
            info!("Using in-memory profile store; profiles are lost on exit");
            Arc::new(MemoryStore::new())
        }
    };
    let service = ProfileService::new(store);

    // Handle shutdown signals
    let shutdown = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Shutdown signal received, initiating graceful shutdown"),
            Err(e) => {
                error!("Failed to listen for shutdown signal: {}", e);
                std::future::pending::<()>().await
            }
        }
    };

    if let Err(e) = api::start_api_server(&config.server, service, shutdown).await {
        error!("API server error: {}", e);
        return Err(e);
    }

    info!("Emodak Space shutdown complete");
    Ok(())
}
