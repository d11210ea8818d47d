//! Error types for Homebook server

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::repository::StorageError;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid category")]
    InvalidCategory,

    #[error("Category already exists")]
    DuplicateCategory,

    #[error("Book is already borrowed")]
    AlreadyBorrowed,

    #[error("Book is not borrowed")]
    NotBorrowed,

    /// Required query parameter absent or out of range
    #[error("{0} query parameter is required")]
    MissingParameter(&'static str),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Malformed query string: {0}")]
    InvalidQuery(String),

    #[error("Malformed path: {0}")]
    MalformedPath(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Error response body
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

impl AppError {
    /// Fallback for unmatched routes
    pub fn route_not_found() -> Self {
        AppError::NotFound("Not Found".to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::NotFound(msg) => msg.clone(),
            AppError::Storage(e) => {
                tracing::error!("Storage error: {}", e);
                "Internal server error".to_string()
            }
            AppError::MalformedBody(detail) => {
                tracing::debug!("Rejected request body: {}", detail);
                self.to_string()
            }
            _ => self.to_string(),
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedBody(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidQuery(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::MalformedPath(rejection.body_text())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(AppError::InvalidCategory.to_string(), "Invalid category");
        assert_eq!(AppError::DuplicateCategory.to_string(), "Category already exists");
        assert_eq!(
            AppError::MissingParameter("Month").to_string(),
            "Month query parameter is required"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::route_not_found().status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::AlreadyBorrowed.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NotBorrowed.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::MalformedBody("EOF while parsing".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::MalformedPath("Invalid UTF-8".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }
}
