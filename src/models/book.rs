//! Book model and related types

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::repository::Record;

/// Book record as stored in `books.json`
///
/// `is_borrowed` and `borrowed_by` only change through borrow and return,
/// and `is_borrowed` is true exactly when `borrowed_by` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: i32,
    #[serde(default)]
    pub is_borrowed: bool,
    #[serde(default)]
    pub borrowed_by: Option<String>,
}

impl Record for Book {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Book {
    pub fn new(id: i64, data: CreateBook) -> Self {
        Self {
            id,
            title: data.title,
            author: data.author,
            year: data.year,
            is_borrowed: false,
            borrowed_by: None,
        }
    }

    /// Case-insensitive substring match on title or author.
    /// `needle` must already be lowercased.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.author.to_lowercase().contains(needle)
    }

    pub fn apply(&mut self, update: UpdateBook) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(author) = update.author {
            self.author = author;
        }
        if let Some(year) = update.year {
            self.year = year;
        }
    }

    pub fn lend_to(&mut self, user: &str) {
        self.is_borrowed = true;
        self.borrowed_by = Some(user.to_string());
    }

    /// Mark the book available again, returning who held it
    pub fn take_back(&mut self) -> Option<String> {
        self.is_borrowed = false;
        self.borrowed_by.take()
    }

    /// Bring `is_borrowed` in line with `borrowed_by`, true if anything changed
    pub fn normalize_loan_state(&mut self) -> bool {
        let borrowed = self.borrowed_by.is_some();
        let changed = self.is_borrowed != borrowed;
        self.is_borrowed = borrowed;
        changed
    }
}

/// Create book request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub year: i32,
}

/// Update book request; loan state is not editable here
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
}

/// Book list filter
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    /// Case-insensitive substring of title or author
    pub search: Option<String>,
}
