//! Application router builder.
//!
//! Shared by `main.rs` and `tests/common/mod.rs` so both run the same stack.

use axum::Router;
use fsnd_http::config::ServerConfig;
use fsnd_http::{health, router::apply_middleware};

use crate::error;
use crate::routes;
use crate::state::AppState;

/// Build the full coffee-shop [`Router`] with all middleware layers.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let app = Router::new()
        .merge(health::router::<AppState>())
        .merge(routes::api_routes())
        .fallback(error::not_found)
        .with_state(state);

    apply_middleware(app, config)
}
