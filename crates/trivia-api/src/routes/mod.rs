pub mod categories;
pub mod questions;
pub mod quizzes;

use axum::Router;

use crate::state::AppState;

/// Every trivia route, mounted at the root.
///
/// ```text
/// /categories        category list and per-category questions
/// /questions         list, create, delete
/// /searchQuestions   search
/// /quizzes           next quiz question
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(categories::router())
        .merge(questions::router())
        .merge(quizzes::router())
}
