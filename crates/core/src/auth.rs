//! Bearer-token header parsing and permission checks.
//!
//! Signature verification lives with the HTTP crate that owns the keys; this
//! module only deals with the parts that need no key material: pulling the
//! token out of the `Authorization` header and checking the `permissions`
//! claim of an already-verified token.

use serde::Serialize;

/// HTTP status used for every authentication and authorization failure.
pub const AUTH_ERROR_STATUS: u16 = 401;

// ---------------------------------------------------------------------------
// Permission constants
// ---------------------------------------------------------------------------

/// Read drinks with full recipes.
pub const PERM_GET_DRINKS_DETAIL: &str = "get:drinks-detail";
/// Create drinks.
pub const PERM_POST_DRINKS: &str = "post:drinks";
/// Update drinks.
pub const PERM_PATCH_DRINKS: &str = "patch:drinks";
/// Delete drinks.
pub const PERM_DELETE_DRINKS: &str = "delete:drinks";

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// A failed token or permission check.
///
/// Carries the HTTP status to respond with, a stable machine-readable `code`,
/// and a human-readable `description` that is returned to the client as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{code}: {description}")]
pub struct AuthError {
    pub status: u16,
    pub code: &'static str,
    pub description: String,
}

impl AuthError {
    pub fn new(code: &'static str, description: impl Into<String>) -> Self {
        Self {
            status: AUTH_ERROR_STATUS,
            code,
            description: description.into(),
        }
    }

    pub fn header_missing() -> Self {
        Self::new(
            "authorization_header_missing",
            "Authorization header is expected.",
        )
    }

    pub fn invalid_header(description: impl Into<String>) -> Self {
        Self::new("invalid_header", description)
    }

    pub fn token_expired() -> Self {
        Self::new("token_expired", "Token expired.")
    }

    pub fn invalid_claims(description: impl Into<String>) -> Self {
        Self::new("invalid_claims", description)
    }

    pub fn permission_not_found() -> Self {
        Self::new("unauthorized", "Permission not found.")
    }
}

// ---------------------------------------------------------------------------
// Header parsing
// ---------------------------------------------------------------------------

/// Extract the token from an `Authorization: Bearer <token>` header value.
///
/// The scheme is matched case-insensitively. Exactly two whitespace-separated
/// parts are required.
pub fn bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    let header = header.ok_or_else(AuthError::header_missing)?;
    let parts: Vec<&str> = header.split_whitespace().collect();

    match parts.as_slice() {
        [] => Err(AuthError::header_missing()),
        [scheme, ..] if !scheme.eq_ignore_ascii_case("bearer") => Err(
            AuthError::invalid_header("Authorization header must start with \"Bearer\"."),
        ),
        [_] => Err(AuthError::invalid_header("Token not found.")),
        [_, token] => Ok(token),
        _ => Err(AuthError::invalid_header(
            "Authorization header must be bearer token.",
        )),
    }
}

// ---------------------------------------------------------------------------
// Permission check
// ---------------------------------------------------------------------------

/// Require `required` to be present in the token's `permissions` claim.
///
/// `permissions` is `None` when the claim is absent from the token.
pub fn check_permissions(permissions: Option<&[String]>, required: &str) -> Result<(), AuthError> {
    let granted = permissions
        .ok_or_else(|| AuthError::invalid_claims("Permissions not included in JWT."))?;

    if granted.iter().any(|p| p == required) {
        Ok(())
    } else {
        Err(AuthError::permission_not_found())
    }
}
