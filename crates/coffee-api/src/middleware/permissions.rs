//! Permission-gated extractors.
//!
//! [`RequirePermission`] wraps [`AuthClaims`] and rejects tokens whose
//! `permissions` claim lacks `P::PERMISSION`. Because it is an extractor,
//! the check runs before the handler touches the database.

use std::marker::PhantomData;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use fsnd_core::auth::{
    check_permissions, PERM_DELETE_DRINKS, PERM_GET_DRINKS_DETAIL, PERM_PATCH_DRINKS,
    PERM_POST_DRINKS,
};

use super::auth::AuthClaims;
use crate::auth::jwt::Claims;
use crate::error::AppError;
use crate::state::AppState;

/// A permission string a route requires.
pub trait RequiredPermission {
    const PERMISSION: &'static str;
}

pub struct GetDrinksDetail;
pub struct PostDrinks;
pub struct PatchDrinks;
pub struct DeleteDrinks;

impl RequiredPermission for GetDrinksDetail {
    const PERMISSION: &'static str = PERM_GET_DRINKS_DETAIL;
}
impl RequiredPermission for PostDrinks {
    const PERMISSION: &'static str = PERM_POST_DRINKS;
}
impl RequiredPermission for PatchDrinks {
    const PERMISSION: &'static str = PERM_PATCH_DRINKS;
}
impl RequiredPermission for DeleteDrinks {
    const PERMISSION: &'static str = PERM_DELETE_DRINKS;
}

/// Requires a verified token granting `P::PERMISSION`. Rejects with 401.
///
/// ```ignore
/// async fn delete_drink(auth: RequirePermission<DeleteDrinks>) -> AppResult<..> {
///     tracing::info!(sub = ?auth.claims.sub, "deleting");
/// }
/// ```
pub struct RequirePermission<P> {
    pub claims: Claims,
    permission: PhantomData<fn() -> P>,
}

impl<P: RequiredPermission> FromRequestParts<AppState> for RequirePermission<P> {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthClaims(claims) = AuthClaims::from_request_parts(parts, state).await?;
        check_permissions(claims.permissions.as_deref(), P::PERMISSION)?;
        Ok(RequirePermission {
            claims,
            permission: PhantomData,
        })
    }
}
