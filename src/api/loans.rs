//! Loan management endpoints

use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult},
    models::loan::{BorrowQuery, LoanMessage},
    LibraryState,
};

use super::record_id;

/// Lend a book to a user
#[utoipa::path(
    get,
    path = "/borrow/{id}",
    tag = "loans",
    params(
        ("id" = i64, Path, description = "Book ID"),
        BorrowQuery
    ),
    responses(
        (status = 200, description = "Book lent", body = LoanMessage),
        (status = 400, description = "Already borrowed or user missing", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn borrow_book(
    State(state): State<LibraryState>,
    WithRejection(Path(id), _): WithRejection<Path<String>, AppError>,
    WithRejection(Query(query), _): WithRejection<Query<BorrowQuery>, AppError>,
) -> AppResult<Json<LoanMessage>> {
    let id = record_id(&id, "Book")?;
    let message = state.services.loans.borrow(id, query.user.as_deref()).await?;
    Ok(Json(message))
}

/// Take a borrowed book back
#[utoipa::path(
    get,
    path = "/return/{id}",
    tag = "loans",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book returned", body = LoanMessage),
        (status = 400, description = "Book is not borrowed", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn return_book(
    State(state): State<LibraryState>,
    WithRejection(Path(id), _): WithRejection<Path<String>, AppError>,
) -> AppResult<Json<LoanMessage>> {
    let id = record_id(&id, "Book")?;
    let message = state.services.loans.return_book(id).await?;
    Ok(Json(message))
}

/// Who currently holds which books
#[utoipa::path(
    get,
    path = "/borrowers",
    tag = "loans",
    responses(
        (status = 200, description = "User name to borrowed book IDs", body = BTreeMap<String, Vec<i64>>)
    )
)]
pub async fn list_borrowers(State(state): State<LibraryState>) -> Json<BTreeMap<String, Vec<i64>>> {
    Json(state.services.loans.borrowers().await)
}
