//! Category management service

use crate::{
    error::{AppError, AppResult},
    repository::ExpenseStore,
};

#[derive(Clone)]
pub struct CategoriesService {
    store: ExpenseStore,
}

impl CategoriesService {
    pub fn new(store: ExpenseStore) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<String> {
        self.store.lock().await.categories.list().to_vec()
    }

    pub async fn create(&self, name: String) -> AppResult<String> {
        let mut ledger = self.store.lock().await;

        if ledger.has_category(&name) {
            return Err(AppError::DuplicateCategory);
        }
        ledger.categories.insert(name.clone());
        ledger.categories.save().await?;

        tracing::info!(category = %name, "Category created");
        Ok(name)
    }

    /// Remove a category together with every expense filed under it.
    /// Returns how many expenses went with it.
    pub async fn delete(&self, name: &str) -> AppResult<usize> {
        let mut ledger = self.store.lock().await;

        let index = ledger
            .categories
            .position(|c| c == name)
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

        let removed = ledger.expenses.retain(|e| e.category != name);
        ledger.categories.remove_at(index);

        ledger.categories.save().await?;
        ledger.expenses.save().await?;

        tracing::info!(category = %name, expenses_removed = removed, "Category deleted");
        Ok(removed)
    }
}
