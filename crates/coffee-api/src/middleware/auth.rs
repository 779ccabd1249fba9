//! Bearer-token authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use fsnd_core::auth::{bearer_token, AuthError};

use crate::auth::jwt::Claims;
use crate::error::AppError;
use crate::state::AppState;

/// Verified claims of the request's bearer token.
///
/// ```ignore
/// async fn my_handler(AuthClaims(claims): AuthClaims) -> AppResult<Json<()>> {
///     tracing::info!(sub = ?claims.sub, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthClaims(pub Claims);

impl FromRequestParts<AppState> for AuthClaims {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = match parts.headers.get(AUTHORIZATION) {
            None => None,
            Some(value) => Some(value.to_str().map_err(|_| {
                AuthError::invalid_header("Authorization header must be bearer token.")
            })?),
        };

        let token = bearer_token(header)?;
        let claims = state.verifier.verify(token)?;
        Ok(AuthClaims(claims))
    }
}
