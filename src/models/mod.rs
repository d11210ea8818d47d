//! Data models for Homebook

pub mod amount;
pub mod book;
pub mod category;
pub mod expense;
pub mod loan;
pub mod statistics;

// Re-export commonly used types
pub use book::{Book, CreateBook, UpdateBook};
pub use category::CategoryBody;
pub use expense::{CreateExpense, Expense, UpdateExpense};
pub use loan::{BorrowerIndex, LoanMessage};
pub use statistics::StatisticsResponse;
