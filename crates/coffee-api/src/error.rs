use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fsnd_core::auth::AuthError;
use fsnd_core::error::CoreError;
use fsnd_http::envelope::error_response;

/// Message for every 404 response.
pub const NOT_FOUND_MESSAGE: &str = "resource not found";
/// Message for every 422 response.
pub const UNPROCESSABLE_MESSAGE: &str = "unprocessable";

/// Application-level error type for HTTP handlers.
///
/// Token and permission failures carry their own status and description;
/// everything else collapses to a fixed message per status.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Malformed request body: {0}")]
    Json(#[from] JsonRejection),

    #[error("Invalid path parameter: {0}")]
    Path(#[from] PathRejection),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        AppError::Core(CoreError::Unauthorized(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Core(CoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::Core(CoreError::Validation(msg)) => {
                tracing::debug!(error = %msg, "Rejected invalid input");
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Core(CoreError::Unauthorized(auth)) => {
                tracing::debug!(code = auth.code, "Rejected credentials");
                return error_response(
                    StatusCode::from_u16(auth.status).unwrap_or(StatusCode::UNAUTHORIZED),
                    auth.description.clone(),
                );
            }
            AppError::Database(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            AppError::Database(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                tracing::debug!(constraint = ?db.constraint(), "Duplicate drink");
                StatusCode::UNPROCESSABLE_ENTITY
            }
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
