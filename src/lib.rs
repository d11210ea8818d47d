//! Homebook
//!
//! Two small REST JSON services sharing one code base: an expense tracker
//! (expenses, categories, monthly statistics) and a library lending tracker
//! (books, borrow and return). Each keeps its collections in memory and
//! mirrors them to JSON files after every change.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod server;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// State shared across the expense service handlers
#[derive(Clone)]
pub struct ExpenseState {
    pub services: Arc<services::ExpenseServices>,
}

/// State shared across the library service handlers
#[derive(Clone)]
pub struct LibraryState {
    pub services: Arc<services::LibraryServices>,
}
