//! Book catalog service

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
    repository::LibraryStore,
};

pub(crate) fn not_found() -> AppError {
    AppError::NotFound("Book not found".to_string())
}

#[derive(Clone)]
pub struct BooksService {
    store: LibraryStore,
}

impl BooksService {
    pub fn new(store: LibraryStore) -> Self {
        Self { store }
    }

    /// Books in stored order; a non-empty `search` keeps those whose title or
    /// author contains it, ignoring case
    pub async fn list(&self, search: Option<&str>) -> Vec<Book> {
        let needle = search.filter(|s| !s.is_empty()).map(str::to_lowercase);
        let shelf = self.store.lock().await;

        match needle {
            Some(needle) => shelf
                .books
                .iter()
                .filter(|b| b.matches_search(&needle))
                .cloned()
                .collect(),
            None => shelf.books.list().to_vec(),
        }
    }

    pub async fn get(&self, id: i64) -> AppResult<Book> {
        let shelf = self.store.lock().await;
        shelf.books.get(id).cloned().ok_or_else(not_found)
    }

    pub async fn create(&self, data: CreateBook) -> AppResult<Book> {
        let mut shelf = self.store.lock().await;

        let id = shelf.books.next_id();
        let book = Book::new(id, data);
        shelf.books.insert(book.clone());
        shelf.books.save().await?;

        tracing::info!(book_id = id, title = %book.title, "Book created");
        Ok(book)
    }

    pub async fn update(&self, id: i64, data: UpdateBook) -> AppResult<Book> {
        let mut shelf = self.store.lock().await;

        let updated = shelf
            .books
            .update(id, |book| {
                book.apply(data);
                book.clone()
            })
            .ok_or_else(not_found)?;
        shelf.books.save().await?;

        tracing::info!(book_id = id, "Book updated");
        Ok(updated)
    }

    /// Remove a book; an outstanding loan on it is dropped from the index
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut shelf = self.store.lock().await;

        let book = shelf.books.remove(id).ok_or_else(not_found)?;
        if let Some(user) = &book.borrowed_by {
            shelf.borrowers.release(user, id);
            tracing::warn!(book_id = id, user = %user, "Deleted a book that was on loan");
        }
        shelf.books.save().await?;

        tracing::info!(book_id = id, "Book deleted");
        Ok(())
    }
}
