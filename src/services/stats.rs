//! Statistics service

use indexmap::IndexMap;

use crate::{
    error::{AppError, AppResult},
    models::{expense::parse_month, statistics::StatisticsResponse},
    repository::ExpenseStore,
};

#[derive(Clone)]
pub struct StatsService {
    store: ExpenseStore,
}

impl StatsService {
    pub fn new(store: ExpenseStore) -> Self {
        Self { store }
    }

    /// Totals for one calendar month, across every year.
    /// `month` is the raw query value and must be an integer in 1..=12.
    pub async fn monthly(&self, month: Option<&str>) -> AppResult<StatisticsResponse> {
        let month = month
            .and_then(parse_month)
            .ok_or(AppError::MissingParameter("Month"))?;

        let ledger = self.store.lock().await;

        let mut total = 0.0;
        let mut by_category: IndexMap<String, f64> = IndexMap::new();
        for expense in ledger.expenses.iter().filter(|e| e.month() == Some(month)) {
            total += expense.amount;
            *by_category.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
        }

        tracing::debug!(month, total, categories = by_category.len(), "Monthly statistics computed");
        Ok(StatisticsResponse { total, by_category })
    }
}
