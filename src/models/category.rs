//! Expense category types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Categories seeded when no `categories.json` exists
pub const DEFAULT_CATEGORIES: [&str; 4] = ["식비", "교통비", "주거비", "기타"];

pub fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

/// Category create request, also echoed back on success
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryBody {
    #[schema(example = "문화비")]
    pub category: String,
}
