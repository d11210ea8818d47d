//! Homebook library service
//!
//! Book catalog with borrow and return over REST JSON.

use std::sync::Arc;

use anyhow::Context;

use homebook_server::{
    api, config::AppConfig, repository::LibraryStore, server, services::LibraryServices,
    LibraryState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    server::init_tracing(&config.logging);

    tracing::info!("Starting Homebook library service v{}", env!("CARGO_PKG_VERSION"));

    let store = LibraryStore::open(&config.storage)
        .await
        .context("Failed to load library data")?;

    let state = LibraryState {
        services: Arc::new(LibraryServices::new(store)),
    };

    server::serve(api::library_router(state), &config.library, "Library").await
}
