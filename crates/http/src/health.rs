use axum::extract::{FromRef, State};
use axum::{routing::get, Json, Router};
use fsnd_db::DbPool;
use serde::Serialize;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
}

/// GET /health -- returns service and database health.
async fn health_check(State(pool): State<DbPool>) -> Json<HealthResponse> {
    let db_healthy = fsnd_db::health_check(&pool).await.is_ok();

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Mount the health check route for any state that exposes a [`DbPool`].
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    DbPool: FromRef<S>,
{
    Router::new().route("/health", get(health_check))
}
