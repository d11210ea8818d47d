//! Homebook expense service
//!
//! Expenses, categories and monthly statistics over REST JSON.

use std::sync::Arc;

use anyhow::Context;

use homebook_server::{
    api, config::AppConfig, repository::ExpenseStore, server, services::ExpenseServices,
    ExpenseState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    server::init_tracing(&config.logging);

    tracing::info!("Starting Homebook expense service v{}", env!("CARGO_PKG_VERSION"));

    let store = ExpenseStore::open(&config.storage)
        .await
        .context("Failed to load expense data")?;

    let state = ExpenseState {
        services: Arc::new(ExpenseServices::new(store)),
    };

    server::serve(api::expense_router(state), &config.expense, "Expense").await
}
