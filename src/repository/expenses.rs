//! Expense and category store

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use super::{Collection, JsonFile, StorageError};
use crate::{
    config::StorageConfig,
    models::{category::default_categories, expense::Expense},
};

/// Both collections of the expense service, always edited together
#[derive(Debug)]
pub struct Ledger {
    pub expenses: Collection<Expense>,
    pub categories: Collection<String>,
}

impl Ledger {
    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c == name)
    }
}

/// Shared handle on the expense service's [`Ledger`].
///
/// The lock is held for the whole check-mutate-persist sequence, so there is
/// at most one writer at a time.
#[derive(Clone)]
pub struct ExpenseStore {
    ledger: Arc<Mutex<Ledger>>,
}

impl ExpenseStore {
    pub async fn open(storage: &StorageConfig) -> Result<Self, StorageError> {
        let expenses = Collection::load(JsonFile::new(storage.expenses_path()), Vec::new).await?;
        let categories =
            Collection::load(JsonFile::new(storage.categories_path()), default_categories).await?;

        tracing::info!(
            expenses = expenses.len(),
            categories = categories.len(),
            "Expense store opened"
        );

        Ok(Self {
            ledger: Arc::new(Mutex::new(Ledger {
                expenses,
                categories,
            })),
        })
    }

    pub async fn lock(&self) -> MutexGuard<'_, Ledger> {
        self.ledger.lock().await
    }
}
