//! Business logic services

pub mod books;
pub mod categories;
pub mod expenses;
pub mod loans;
pub mod stats;

use crate::repository::{ExpenseStore, LibraryStore};

/// Services of the expense tracker, all sharing one [`ExpenseStore`]
#[derive(Clone)]
pub struct ExpenseServices {
    pub expenses: expenses::ExpensesService,
    pub categories: categories::CategoriesService,
    pub stats: stats::StatsService,
}

impl ExpenseServices {
    pub fn new(store: ExpenseStore) -> Self {
        Self {
            expenses: expenses::ExpensesService::new(store.clone()),
            categories: categories::CategoriesService::new(store.clone()),
            stats: stats::StatsService::new(store),
        }
    }
}

/// Services of the library lending tracker, sharing one [`LibraryStore`]
#[derive(Clone)]
pub struct LibraryServices {
    pub books: books::BooksService,
    pub loans: loans::LoansService,
}

impl LibraryServices {
    pub fn new(store: LibraryStore) -> Self {
        Self {
            books: books::BooksService::new(store.clone()),
            loans: loans::LoansService::new(store),
        }
    }
}
