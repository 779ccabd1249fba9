use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fsnd_core::error::CoreError;
use fsnd_http::envelope::error_response;

/// Message for every 404 response.
pub const NOT_FOUND_MESSAGE: &str = "Resource not found";
/// Message for every 422 response.
pub const UNPROCESSABLE_MESSAGE: &str = "Unprocessable";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the `{success, error, message}`
/// envelope. Details are logged, never returned to the client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `fsnd_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The request body was not the expected JSON.
    #[error("Malformed request body: {0}")]
    Json(#[from] JsonRejection),

    /// A path segment failed to parse (e.g. a non-numeric id).
    #[error("Invalid path parameter: {0}")]
    Path(#[from] PathRejection),

    /// Nothing to return for the request (empty page, unknown category).
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Core(CoreError::NotFound { .. }) | AppError::NotFound(_) => {
                tracing::debug!(error = %self, "Responding 404");
                StatusCode::NOT_FOUND
            }
            AppError::Core(CoreError::Validation(msg)) => {
                tracing::debug!(error = %msg, "Rejected invalid input");
                StatusCode::UNPROCESSABLE_ENTITY
            }
            // Trivia routes are public; no handler produces this.
            AppError::Core(CoreError::Unauthorized(auth)) => {
                tracing::warn!(code = auth.code, "Unexpected auth error");
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Database(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Json(rejection) => {
                tracing::debug!(error = %rejection, "Rejected request body");
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Path(rejection) => {
                tracing::debug!(error = %rejection, "Rejected path parameter");
                StatusCode::NOT_FOUND
            }
        };

        let message = if status == StatusCode::NOT_FOUND {
            NOT_FOUND_MESSAGE
        } else {
            UNPROCESSABLE_MESSAGE
        };
        error_response(status, message)
    }
}

/// Fallback for unmatched routes.
pub async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
}
