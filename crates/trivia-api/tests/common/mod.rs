#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use fsnd_db::models::question::CreateQuestion;
use fsnd_db::repositories::QuestionRepo;
use fsnd_http::config::{CorsOrigins, ServerConfig};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use fsnd_trivia::router::build_app_router;
use fsnd_trivia::state::AppState;

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
    build_app_router(AppState { pool }, &test_config())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body.to_string())).await
}

/// POST a raw, possibly malformed, JSON body.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response {
    send(app, Method::POST, uri, Some(body.to_string())).await
}

async fn send(app: Router, method: Method, uri: &str, body: Option<String>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
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

/// Insert a question stored under category id `category` (1-based).
pub async fn seed_question(pool: &PgPool, text: &str, category: i64) -> i64 {
    let input = CreateQuestion {
        question: text.to_string(),
        answer: format!("answer to {text}"),
        category: Some(category),
        difficulty: Some(1),
    };
    QuestionRepo::create(pool, &input).await.unwrap().id
}

/// Insert `count` questions under category id `category`, returning their ids.
pub async fn seed_questions(pool: &PgPool, prefix: &str, category: i64, count: usize) -> Vec<i64> {
    let mut ids = Vec::with_capacity(count);
    for n in 0..count {
        ids.push(seed_question(pool, &format!("{prefix} {n}"), category).await);
    }
    ids
}
