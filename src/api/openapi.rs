//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, categories, expenses, health, loans, statistics};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Homebook Expense API",
        version = "0.1.0",
        description = "Expense tracker: expenses, categories and monthly statistics"
    ),
    paths(
        health::expense_health,
        // Expenses
        expenses::list_expenses,
        expenses::create_expense,
        expenses::get_expense,
        expenses::update_expense,
        expenses::delete_expense,
        // Categories
        categories::list_categories,
        categories::create_category,
        categories::delete_category,
        // Statistics
        statistics::get_statistics,
    ),
    components(
        schemas(
            crate::models::expense::Expense,
            crate::models::expense::CreateExpense,
            crate::models::expense::UpdateExpense,
            crate::models::category::CategoryBody,
            crate::models::statistics::StatisticsResponse,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "expenses", description = "Expense records"),
        (name = "categories", description = "Expense categories"),
        (name = "statistics", description = "Monthly totals")
    )
)]
pub struct ExpenseApiDoc;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Homebook Library API",
        version = "0.1.0",
        description = "Library lending tracker: books, borrow and return"
    ),
    paths(
        health::library_health,
        // Books
        books::list_books,
        books::create_book,
        books::get_book,
        books::update_book,
        books::delete_book,
        // Loans
        loans::borrow_book,
        loans::return_book,
        loans::list_borrowers,
    ),
    components(
        schemas(
            crate::models::book::Book,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            crate::models::loan::LoanMessage,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book catalog"),
        (name = "loans", description = "Borrow and return")
    )
)]
pub struct LibraryApiDoc;

/// Swagger UI for the expense service
pub fn expense_docs_router() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ExpenseApiDoc::openapi()))
}

/// Swagger UI for the library service
pub fn library_docs_router() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", LibraryApiDoc::openapi()))
}
