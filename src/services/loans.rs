//! Loan management service: borrow/return transitions

use std::collections::BTreeMap;

use crate::{
    error::{AppError, AppResult},
    models::loan::LoanMessage,
    repository::LibraryStore,
};

use super::books::not_found;

#[derive(Clone)]
pub struct LoansService {
    store: LibraryStore,
}

impl LoansService {
    pub fn new(store: LibraryStore) -> Self {
        Self { store }
    }

    /// Lend an available book to `user`.
    ///
    /// A user may hold several books at once; each loan gets its own index entry.
    pub async fn borrow(&self, id: i64, user: Option<&str>) -> AppResult<LoanMessage> {
        let mut shelf = self.store.lock().await;

        let book = shelf.books.get(id).ok_or_else(not_found)?;
        let user = user
            .filter(|u| !u.trim().is_empty())
            .ok_or(AppError::MissingParameter("User"))?;
        if book.is_borrowed {
            tracing::debug!(book_id = id, user = %user, "Book already on loan");
            return Err(AppError::AlreadyBorrowed);
        }

        shelf.books.update(id, |book| book.lend_to(user));
        shelf.borrowers.record(user, id);
        shelf.books.save().await?;

        tracing::info!(book_id = id, user = %user, "Book borrowed");
        Ok(LoanMessage::borrowed(user))
    }

    /// Bring a borrowed book back, naming whoever held it
    pub async fn return_book(&self, id: i64) -> AppResult<LoanMessage> {
        let mut shelf = self.store.lock().await;

        let book = shelf.books.get(id).ok_or_else(not_found)?;
        if !book.is_borrowed {
            return Err(AppError::NotBorrowed);
        }

        let user = shelf
            .books
            .update(id, |book| book.take_back())
            .flatten()
            .unwrap_or_default();
        shelf.borrowers.release(&user, id);
        shelf.books.save().await?;

        tracing::info!(book_id = id, user = %user, "Book returned");
        Ok(LoanMessage::returned(&user))
    }

    /// Current borrower index, user → book ids
    pub async fn borrowers(&self) -> BTreeMap<String, Vec<i64>> {
        self.store.lock().await.borrowers.snapshot()
    }
}
