//! Loan (borrow) types and the borrower index

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::book::Book;

/// Borrow request parameters
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BorrowQuery {
    /// Name of the borrowing user
    pub user: Option<String>,
}

/// Confirmation returned by borrow and return
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoanMessage {
    pub message: String,
}

impl LoanMessage {
    pub fn borrowed(user: &str) -> Self {
        Self {
            message: format!("Book borrowed by {}", user),
        }
    }

    pub fn returned(user: &str) -> Self {
        Self {
            message: format!("Book returned by {}", user),
        }
    }
}

/// User name → ids of the books that user currently holds.
///
/// Derived from `Book::borrowed_by`; the book records stay the source of truth
/// and the index can always be rebuilt from them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BorrowerIndex {
    loans: BTreeMap<String, BTreeSet<i64>>,
}

impl BorrowerIndex {
    pub fn rebuild<'a>(books: impl IntoIterator<Item = &'a Book>) -> Self {
        let mut index = Self::default();
        for book in books {
            if let Some(user) = &book.borrowed_by {
                index.record(user, book.id);
            }
        }
        index
    }

    pub fn record(&mut self, user: &str, book_id: i64) {
        self.loans.entry(user.to_string()).or_default().insert(book_id);
    }

    /// Drop one loan; the user disappears once they hold nothing
    pub fn release(&mut self, user: &str, book_id: i64) {
        if let Some(ids) = self.loans.get_mut(user) {
            ids.remove(&book_id);
            if ids.is_empty() {
                self.loans.remove(user);
            }
        }
    }

    pub fn books_of(&self, user: &str) -> Vec<i64> {
        self.loans
            .get(user)
            .map(|ids| ids.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn contains_user(&self, user: &str) -> bool {
        self.loans.contains_key(user)
    }

    pub fn snapshot(&self) -> BTreeMap<String, Vec<i64>> {
        self.loans
            .iter()
            .map(|(user, ids)| (user.clone(), ids.iter().copied().collect()))
            .collect()
    }
}
