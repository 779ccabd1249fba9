use axum::extract::FromRef;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted internally.
#[derive(Clone, FromRef)]
pub struct AppState {
    /// Database connection pool.
    pub pool: fsnd_db::DbPool,
}
