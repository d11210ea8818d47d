//! Book store with its borrower index

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use super::{Collection, JsonFile, StorageError};
use crate::{
    config::StorageConfig,
    models::{book::Book, loan::BorrowerIndex},
};

/// Books plus the derived borrower index
#[derive(Debug)]
pub struct Shelf {
    pub books: Collection<Book>,
    pub borrowers: BorrowerIndex,
}

/// Shared handle on the library service's [`Shelf`]
#[derive(Clone)]
pub struct LibraryStore {
    shelf: Arc<Mutex<Shelf>>,
}

impl LibraryStore {
    /// Load `books.json` and rebuild the borrower index from it
    pub async fn open(storage: &StorageConfig) -> Result<Self, StorageError> {
        let mut books: Collection<Book> =
            Collection::load(JsonFile::new(storage.books_path()), Vec::new).await?;

        for book in books.iter_mut() {
            if book.normalize_loan_state() {
                tracing::warn!(
                    book_id = book.id,
                    "Loan flag disagreed with borrower on load, using borrower field"
                );
            }
        }

        let borrowers = BorrowerIndex::rebuild(books.iter());
        tracing::info!(books = books.len(), "Library store opened");

        Ok(Self {
            shelf: Arc::new(Mutex::new(Shelf { books, borrowers })),
        })
    }

    pub async fn lock(&self) -> MutexGuard<'_, Shelf> {
        self.shelf.lock().await
    }
}
