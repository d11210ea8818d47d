//! API handlers and routers for the Homebook REST endpoints

pub mod books;
pub mod categories;
pub mod expenses;
pub mod health;
pub mod loans;
pub mod openapi;
pub mod statistics;

use axum::{
    extract::Request,
    http::{header, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::{AppError, AppResult},
    ExpenseState, LibraryState,
};

const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";

/// Router of the expense service
pub fn expense_router(state: ExpenseState) -> Router {
    let routes = Router::new()
        .route("/health", get(health::expense_health).fallback(not_found))
        // Expenses
        .route(
            "/expenses",
            get(expenses::list_expenses)
                .post(expenses::create_expense)
                .fallback(not_found),
        )
        .route(
            "/expenses/:id",
            get(expenses::get_expense)
                .put(expenses::update_expense)
                .delete(expenses::delete_expense)
                .fallback(not_found),
        )
        // Categories
        .route(
            "/categories",
            get(categories::list_categories)
                .post(categories::create_category)
                .fallback(not_found),
        )
        .route(
            "/categories/:name",
            delete(categories::delete_category).fallback(not_found),
        )
        // Statistics
        .route("/statistics", get(statistics::get_statistics).fallback(not_found))
        .fallback(not_found)
        .with_state(state);

    with_layers(routes.merge(openapi::expense_docs_router()))
}

/// Router of the library service
pub fn library_router(state: LibraryState) -> Router {
    let routes = Router::new()
        .route("/health", get(health::library_health).fallback(not_found))
        // Books
        .route(
            "/books",
            get(books::list_books)
                .post(books::create_book)
                .fallback(not_found),
        )
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book)
                .fallback(not_found),
        )
        // Loans
        .route("/borrow/:id", get(loans::borrow_book).fallback(not_found))
        .route("/return/:id", get(loans::return_book).fallback(not_found))
        .route("/borrowers", get(loans::list_borrowers).fallback(not_found))
        .fallback(not_found)
        .with_state(state);

    with_layers(routes.merge(openapi::library_docs_router()))
}

/// Tracing, CORS, and the `OPTIONS` short-circuit, outermost last
fn with_layers(router: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(middleware::from_fn(preflight))
}

/// Answer every `OPTIONS` request with an empty 204 carrying the CORS headers
async fn preflight(request: Request, next: Next) -> Response {
    if request.method() != Method::OPTIONS {
        return next.run(request).await;
    }

    (
        StatusCode::NO_CONTENT,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
    )
        .into_response()
}

/// Fallback for unknown paths and unsupported methods
pub async fn not_found() -> AppError {
    AppError::route_not_found()
}

/// Parse a numeric path id; anything else names no record
pub(crate) fn record_id(raw: &str, kind: &str) -> AppResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| AppError::NotFound(format!("{} not found", kind)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id() {
        assert_eq!(record_id("1712345678901", "Book").unwrap(), 1712345678901);
        match record_id("abc", "Book") {
            Err(AppError::NotFound(msg)) => assert_eq!(msg, "Book not found"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(record_id("", "Expense").is_err());
    }
}
