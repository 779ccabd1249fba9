use std::sync::Arc;

use axum::extract::FromRef;

use crate::auth::jwt::TokenVerifier;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted internally and the
/// verifier is wrapped in `Arc`.
#[derive(Clone, FromRef)]
pub struct AppState {
    /// Database connection pool.
    pub pool: fsnd_db::DbPool,
    /// Bearer-token verifier built at startup.
    pub verifier: Arc<TokenVerifier>,
}
