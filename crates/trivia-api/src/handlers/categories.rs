//! Handlers for trivia categories and per-category question listings.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use fsnd_core::pagination::{paginate, PageParams};
use fsnd_core::trivia::{category_id_from_index, reported_current_category};
use fsnd_core::types::DbId;
use fsnd_db::models::question::{Question, QuestionView};
use fsnd_db::repositories::{CategoryRepo, QuestionRepo};
use fsnd_http::envelope::Success;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppPath;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CategoryList {
    pub categories: Vec<String>,
    pub total_categories: usize,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestions {
    pub questions: Vec<QuestionView>,
    pub total_questions: usize,
    pub current_category: DbId,
}

/// GET /categories
///
/// Category type names ordered by id. The frontend addresses categories by
/// their position in this list.
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list(&state.pool).await?;
    let total_categories = categories.len();

    Ok(Success::new(CategoryList {
        categories: categories.into_iter().map(|c| c.kind).collect(),
        total_categories,
    }))
}

/// GET /categories/{id}/questions?page=
///
/// One page of the questions in the category at frontend index `id`.
/// 404 if the page is empty.
pub async fn list_category_questions(
    State(state): State<AppState>,
    AppPath(index): AppPath<DbId>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let (Some(category_id), Some(current_category)) =
        (category_id_from_index(index), reported_current_category(index))
    else {
        return Err(AppError::NotFound(format!("category index {index}")));
    };
    let selection = QuestionRepo::list_by_category(&state.pool, category_id).await?;
    let total_questions = selection.len();

    let page = params.page();
    let questions = paginate(selection.iter().map(Question::format).collect(), page);
    if questions.is_empty() {
        return Err(AppError::NotFound(format!(
            "page {page} of category {category_id}"
        )));
    }

    Ok(Success::new(CategoryQuestions {
        questions,
        total_questions,
        current_category,
    }))
}
