//! Expense endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult},
    models::expense::{CreateExpense, Expense, ExpenseFilter, ExpenseQuery, UpdateExpense},
    ExpenseState,
};

use super::record_id;

/// List expenses, optionally filtered by category and month
#[utoipa::path(
    get,
    path = "/expenses",
    tag = "expenses",
    params(ExpenseQuery),
    responses(
        (status = 200, description = "Matching expenses in stored order", body = Vec<Expense>)
    )
)]
pub async fn list_expenses(
    State(state): State<ExpenseState>,
    WithRejection(Query(query), _): WithRejection<Query<ExpenseQuery>, AppError>,
) -> AppResult<Json<Vec<Expense>>> {
    let filter = ExpenseFilter::from(query);
    let expenses = state.services.expenses.list(&filter).await;
    Ok(Json(expenses))
}

/// Record a new expense
#[utoipa::path(
    post,
    path = "/expenses",
    tag = "expenses",
    request_body = CreateExpense,
    responses(
        (status = 201, description = "Expense created", body = Expense),
        (status = 400, description = "Unknown category or malformed body", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_expense(
    State(state): State<ExpenseState>,
    WithRejection(Json(data), _): WithRejection<Json<CreateExpense>, AppError>,
) -> AppResult<(StatusCode, Json<Expense>)> {
    let expense = state.services.expenses.create(data).await?;
    Ok((StatusCode::CREATED, Json(expense)))
}

/// Get an expense by ID
#[utoipa::path(
    get,
    path = "/expenses/{id}",
    tag = "expenses",
    params(("id" = i64, Path, description = "Expense ID")),
    responses(
        (status = 200, description = "Expense details", body = Expense),
        (status = 404, description = "Expense not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_expense(
    State(state): State<ExpenseState>,
    WithRejection(Path(id), _): WithRejection<Path<String>, AppError>,
) -> AppResult<Json<Expense>> {
    let id = record_id(&id, "Expense")?;
    let expense = state.services.expenses.get(id).await?;
    Ok(Json(expense))
}

/// Update some fields of an expense
#[utoipa::path(
    put,
    path = "/expenses/{id}",
    tag = "expenses",
    params(("id" = i64, Path, description = "Expense ID")),
    request_body = UpdateExpense,
    responses(
        (status = 200, description = "Expense updated", body = Expense),
        (status = 400, description = "Unknown category or malformed body", body = crate::error::ErrorResponse),
        (status = 404, description = "Expense not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_expense(
    State(state): State<ExpenseState>,
    WithRejection(Path(id), _): WithRejection<Path<String>, AppError>,
    WithRejection(Json(data), _): WithRejection<Json<UpdateExpense>, AppError>,
) -> AppResult<Json<Expense>> {
    let id = record_id(&id, "Expense")?;
    let expense = state.services.expenses.update(id, data).await?;
    Ok(Json(expense))
}

/// Delete an expense
#[utoipa::path(
    delete,
    path = "/expenses/{id}",
    tag = "expenses",
    params(("id" = i64, Path, description = "Expense ID")),
    responses(
        (status = 204, description = "Expense deleted"),
        (status = 404, description = "Expense not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_expense(
    State(state): State<ExpenseState>,
    WithRejection(Path(id), _): WithRejection<Path<String>, AppError>,
) -> AppResult<StatusCode> {
    let id = record_id(&id, "Expense")?;
    state.services.expenses.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
