pub mod drinks;

use axum::Router;

use crate::state::AppState;

/// Every coffee-shop route, mounted at the root.
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(drinks::router())
}
