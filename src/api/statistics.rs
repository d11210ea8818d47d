//! Statistics endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::{AppError, AppResult},
    models::statistics::StatisticsResponse,
    ExpenseState,
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StatisticsQuery {
    /// Calendar month 1-12; matches that month in every year
    pub month: Option<String>,
}

/// Spending totals for one month
#[utoipa::path(
    get,
    path = "/statistics",
    tag = "statistics",
    params(StatisticsQuery),
    responses(
        (status = 200, description = "Monthly totals", body = StatisticsResponse),
        (status = 400, description = "Month missing or not 1-12", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_statistics(
    State(state): State<ExpenseState>,
    WithRejection(Query(query), _): WithRejection<Query<StatisticsQuery>, AppError>,
) -> AppResult<Json<StatisticsResponse>> {
    let stats = state.services.stats.monthly(query.month.as_deref()).await?;
    Ok(Json(stats))
}
