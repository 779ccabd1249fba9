#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use fsnd_core::recipe::Ingredient;
use fsnd_db::models::drink::CreateDrink;
use fsnd_db::repositories::DrinkRepo;
use fsnd_http::config::{CorsOrigins, ServerConfig};
use http_body_util::BodyExt;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

use fsnd_coffee::auth::jwt::TokenVerifier;
use fsnd_coffee::router::build_app_router;
use fsnd_coffee::state::AppState;

/// Shared secret the test app verifies tokens with.
pub const TEST_SECRET: &str = "coffee-test-secret-that-is-long-enough";

pub const BARISTA: &[&str] = &["get:drinks-detail"];
pub const MANAGER: &[&str] = &[
    "get:drinks-detail",
    "post:drinks",
    "patch:drinks",
    "delete:drinks",
];

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: CorsOrigins::Any,
        request_timeout_secs: 30,
        database_url: "postgres://unused".to_string(),
    }
}

/// Build the full application router, middleware included, over `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    let state = AppState {
        pool,
        verifier: Arc::new(TokenVerifier::from_secret(TEST_SECRET, None)),
    };
    build_app_router(state, &test_config())
}

// ---------------------------------------------------------------------------
// Tokens
// ---------------------------------------------------------------------------

pub fn sign(claims: serde_json::Value) -> String {
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}

/// A valid token granting `permissions`.
pub fn token(permissions: &[&str]) -> String {
    sign(json!({
        "sub": "auth0|test",
        "permissions": permissions,
        "exp": chrono::Utc::now().timestamp() + 3600,
    }))
}

/// A valid token with no `permissions` claim at all.
pub fn token_without_permissions() -> String {
    sign(json!({
        "sub": "auth0|test",
        "exp": chrono::Utc::now().timestamp() + 3600,
    }))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    send(app, Method::POST, uri, Some(token), Some(body.to_string())).await
}

pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    send(app, Method::PATCH, uri, Some(token), Some(body.to_string())).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Send a request with an arbitrary `Authorization` header value.
pub async fn get_with_header(app: Router, uri: &str, authorization: &str) -> Response {
    let request = Request::get(uri)
        .header("authorization", authorization)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<String>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------

pub fn ingredient(name: &str, color: &str, parts: i32) -> Ingredient {
    Ingredient {
        name: name.to_string(),
        color: color.to_string(),
        parts,
    }
}

/// Insert a drink and return its id.
pub async fn seed_drink(pool: &PgPool, title: &str, recipe: Vec<Ingredient>) -> i64 {
    let input = CreateDrink {
        title: title.to_string(),
        recipe,
    };
    DrinkRepo::create(pool, &input).await.unwrap().id
}
