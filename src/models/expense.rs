//! Expense model and related types

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::repository::Record;

/// Expense record as stored in `expenses.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Expense {
    /// Creation-timestamp id (milliseconds since epoch)
    pub id: i64,
    #[serde(serialize_with = "super::amount::serialize")]
    pub amount: f64,
    /// Must name an existing category when written
    pub category: String,
    /// ISO date, e.g. `2024-03-10`
    pub date: String,
    #[serde(default)]
    pub description: String,
}

impl Record for Expense {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Expense {
    pub fn new(id: i64, data: CreateExpense) -> Self {
        Self {
            id,
            amount: data.amount,
            category: data.category,
            date: data.date,
            description: data.description,
        }
    }

    /// Calendar month (1-12) of the expense date, if the date parses
    pub fn month(&self) -> Option<u32> {
        month_of(&self.date)
    }

    /// Merge the provided fields over this record
    pub fn apply(&mut self, update: UpdateExpense) {
        if let Some(amount) = update.amount {
            self.amount = amount;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
    }
}

/// Create expense request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateExpense {
    pub amount: f64,
    pub category: String,
    pub date: String,
    #[serde(default)]
    pub description: String,
}

/// Update expense request, absent fields are left untouched
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateExpense {
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

/// Expense list filters
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExpenseQuery {
    /// Exact category name
    pub category: Option<String>,
    /// Calendar month 1-12, any year
    pub month: Option<String>,
}

/// Parsed form of [`ExpenseQuery`]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ExpenseFilter {
    pub category: Option<String>,
    pub month: Option<MonthFilter>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MonthFilter {
    Month(u32),
    /// The query named a month that is not a number, nothing matches
    Unmatchable,
}

impl From<ExpenseQuery> for ExpenseFilter {
    fn from(query: ExpenseQuery) -> Self {
        Self {
            category: query.category.filter(|c| !c.is_empty()),
            month: query.month.filter(|m| !m.is_empty()).map(|m| {
                m.trim()
                    .parse::<u32>()
                    .map(MonthFilter::Month)
                    .unwrap_or(MonthFilter::Unmatchable)
            }),
        }
    }
}

impl ExpenseFilter {
    pub fn matches(&self, expense: &Expense) -> bool {
        if let Some(category) = &self.category {
            if &expense.category != category {
                return false;
            }
        }
        match self.month {
            None => true,
            Some(MonthFilter::Month(m)) => expense.month() == Some(m),
            Some(MonthFilter::Unmatchable) => false,
        }
    }
}

/// Parse a month query value, accepting only 1-12
pub fn parse_month(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|m| (1..=12).contains(m))
}

/// Month-of-year of an ISO date or date-time string
pub fn month_of(date: &str) -> Option<u32> {
    let date = date.trim();
    if let Ok(d) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return Some(d.month());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return Some(dt.month());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.month());
    }
    // Year-month only, e.g. `2024-03`
    NaiveDate::parse_from_str(&format!("{}-01", date), "%Y-%m-%d")
        .ok()
        .map(|d| d.month())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: i64, category: &str, date: &str) -> Expense {
        Expense {
            id,
            amount: 1000.0,
            category: category.to_string(),
            date: date.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_month_of() {
        assert_eq!(month_of("2024-03-10"), Some(3));
        assert_eq!(month_of("2023-12-31T23:59:59Z"), Some(12));
        assert_eq!(month_of("2024-07-01T08:00:00"), Some(7));
        assert_eq!(month_of("2024-11"), Some(11));
        assert_eq!(month_of("yesterday"), None);
        assert_eq!(month_of(""), None);
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("3"), Some(3));
        assert_eq!(parse_month("03"), Some(3));
        assert_eq!(parse_month("12"), Some(12));
        assert_eq!(parse_month("0"), None);
        assert_eq!(parse_month("13"), None);
        assert_eq!(parse_month("march"), None);
    }

    #[test]
    fn test_filter_composes_with_and() {
        let filter = ExpenseFilter::from(ExpenseQuery {
            category: Some("식비".into()),
            month: Some("3".into()),
        });

        assert!(filter.matches(&expense(1, "식비", "2024-03-02")));
        assert!(filter.matches(&expense(2, "식비", "2019-03-28")));
        assert!(!filter.matches(&expense(3, "식비", "2024-04-02")));
        assert!(!filter.matches(&expense(4, "교통비", "2024-03-02")));
    }

    #[test]
    fn test_empty_parameters_do_not_filter() {
        let filter = ExpenseFilter::from(ExpenseQuery {
            category: Some(String::new()),
            month: Some(String::new()),
        });
        assert_eq!(filter, ExpenseFilter::default());
        assert!(filter.matches(&expense(1, "기타", "not a date")));
    }

    #[test]
    fn test_non_numeric_month_matches_nothing() {
        let filter = ExpenseFilter::from(ExpenseQuery {
            category: None,
            month: Some("march".into()),
        });
        assert!(!filter.matches(&expense(1, "기타", "2024-03-01")));
    }

    #[test]
    fn test_apply_keeps_unspecified_fields() {
        let mut e = expense(7, "식비", "2024-03-10");
        e.apply(UpdateExpense {
            amount: Some(2500.0),
            description: Some("점심".into()),
            ..Default::default()
        });

        assert_eq!(e.id, 7);
        assert_eq!(e.amount, 2500.0);
        assert_eq!(e.category, "식비");
        assert_eq!(e.date, "2024-03-10");
        assert_eq!(e.description, "점심");
    }
}
