//! JSON response envelopes.
//!
//! Every success body is `{ "success": true, ...payload }` and every error
//! body is `{ "success": false, "error": <status>, "message": <text> }`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Success envelope. The payload's fields are flattened next to `success`,
/// so `T` must serialize as a JSON object.
///
/// ```ignore
/// Ok(Success::new(DrinkList { drinks }))
/// ```
#[derive(Debug, Serialize)]
pub struct Success<T: Serialize> {
    success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> Success<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for Success<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Error envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

/// Build an error response whose `error` field mirrors the HTTP status.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = ErrorBody {
        success: false,
        error: status.as_u16(),
        message: message.into(),
    };
    (status, Json(body)).into_response()
}
