//! Expense management service

use crate::{
    error::{AppError, AppResult},
    models::expense::{CreateExpense, Expense, ExpenseFilter, UpdateExpense},
    repository::ExpenseStore,
};

fn not_found() -> AppError {
    AppError::NotFound("Expense not found".to_string())
}

#[derive(Clone)]
pub struct ExpensesService {
    store: ExpenseStore,
}

impl ExpensesService {
    pub fn new(store: ExpenseStore) -> Self {
        Self { store }
    }

    /// Expenses in stored order, narrowed by `filter`
    pub async fn list(&self, filter: &ExpenseFilter) -> Vec<Expense> {
        let ledger = self.store.lock().await;
        ledger
            .expenses
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect()
    }

    pub async fn get(&self, id: i64) -> AppResult<Expense> {
        let ledger = self.store.lock().await;
        ledger.expenses.get(id).cloned().ok_or_else(not_found)
    }

    /// Record a new expense under an existing category
    pub async fn create(&self, data: CreateExpense) -> AppResult<Expense> {
        let mut ledger = self.store.lock().await;

        if !ledger.has_category(&data.category) {
            tracing::debug!(category = %data.category, "Rejected expense with unknown category");
            return Err(AppError::InvalidCategory);
        }

        let id = ledger.expenses.next_id();
        let expense = Expense::new(id, data);
        ledger.expenses.insert(expense.clone());
        ledger.expenses.save().await?;

        tracing::info!(expense_id = id, category = %expense.category, "Expense created");
        Ok(expense)
    }

    /// Merge the provided fields over an existing expense
    pub async fn update(&self, id: i64, data: UpdateExpense) -> AppResult<Expense> {
        let mut ledger = self.store.lock().await;

        if ledger.expenses.get(id).is_none() {
            return Err(not_found());
        }
        if let Some(category) = &data.category {
            if !ledger.has_category(category) {
                tracing::debug!(expense_id = id, category = %category, "Rejected update with unknown category");
                return Err(AppError::InvalidCategory);
            }
        }

        let updated = ledger
            .expenses
            .update(id, |expense| {
                expense.apply(data);
                expense.clone()
            })
            .ok_or_else(not_found)?;
        ledger.expenses.save().await?;

        tracing::info!(expense_id = id, "Expense updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut ledger = self.store.lock().await;

        ledger.expenses.remove(id).ok_or_else(not_found)?;
        ledger.expenses.save().await?;

        tracing::info!(expense_id = id, "Expense deleted");
        Ok(())
    }
}
