//! Monthly statistics types

use indexmap::IndexMap;
use serde::Serialize;
use utoipa::ToSchema;

use super::amount;

/// Monthly spending summary
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsResponse {
    /// Sum of all matching amounts
    #[serde(serialize_with = "amount::serialize")]
    pub total: f64,
    /// Sum per category, only categories with at least one expense
    #[schema(value_type = Object)]
    #[serde(serialize_with = "amount::serialize_map")]
    pub by_category: IndexMap<String, f64>,
}
