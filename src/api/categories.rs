//! Category endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult},
    models::category::CategoryBody,
    ExpenseState,
};

/// List category names in creation order
#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    responses(
        (status = 200, description = "Category names", body = Vec<String>)
    )
)]
pub async fn list_categories(State(state): State<ExpenseState>) -> Json<Vec<String>> {
    Json(state.services.categories.list().await)
}

/// Add a category
#[utoipa::path(
    post,
    path = "/categories",
    tag = "categories",
    request_body = CategoryBody,
    responses(
        (status = 201, description = "Category created", body = CategoryBody),
        (status = 400, description = "Category already exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_category(
    State(state): State<ExpenseState>,
    WithRejection(Json(body), _): WithRejection<Json<CategoryBody>, AppError>,
) -> AppResult<(StatusCode, Json<CategoryBody>)> {
    let category = state.services.categories.create(body.category).await?;
    Ok((StatusCode::CREATED, Json(CategoryBody { category })))
}

/// Delete a category and every expense filed under it
#[utoipa::path(
    delete,
    path = "/categories/{name}",
    tag = "categories",
    params(("name" = String, Path, description = "Category name")),
    responses(
        (status = 204, description = "Category and its expenses deleted"),
        (status = 404, description = "Category not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_category(
    State(state): State<ExpenseState>,
    WithRejection(Path(name), _): WithRejection<Path<String>, AppError>,
) -> AppResult<StatusCode> {
    state.services.categories.delete(&name).await?;
    Ok(StatusCode::NO_CONTENT)
}
