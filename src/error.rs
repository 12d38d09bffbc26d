//! Error types for the todo agenda API.
//!
//! # Design
//! The four validation variants carry the exact plain-text messages clients
//! match on, so the `thiserror` display string doubles as the response body.
//! `NotFound` gets a dedicated variant because lookup-by-id distinguishes
//! "the todo does not exist" from a storage failure. Storage errors are not
//! part of the API contract; they map to a bare 500 and are logged.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors surfaced by route handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid Todo Status")]
    InvalidStatus,

    #[error("Invalid Todo Priority")]
    InvalidPriority,

    #[error("Invalid Todo Category")]
    InvalidCategory,

    #[error("Invalid Due Date")]
    InvalidDueDate,

    /// The requested todo id does not exist.
    #[error("todo not found")]
    NotFound,

    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidStatus
            | ApiError::InvalidPriority
            | ApiError::InvalidCategory
            | ApiError::InvalidDueDate => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Storage(e) => {
                tracing::error!(error = %e, "storage failure");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
