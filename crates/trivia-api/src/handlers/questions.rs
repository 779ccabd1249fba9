//! Handlers for listing, creating, deleting and searching questions.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use fsnd_core::error::CoreError;
use fsnd_core::lenient;
use fsnd_core::pagination::{paginate, PageParams};
use fsnd_core::trivia::{category_id_from_index, difficulty_from, validate_question_text};
use fsnd_core::types::DbId;
use fsnd_db::models::question::{CreateQuestion, Question, QuestionView};
use fsnd_db::repositories::{CategoryRepo, QuestionRepo};
use fsnd_http::envelope::Success;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request payloads
// ---------------------------------------------------------------------------

/// Body of `POST /questions`. `category` is the frontend category index.
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_int")]
    pub category: Option<DbId>,
    #[serde(default, deserialize_with = "lenient::opt_int")]
    pub difficulty: Option<i64>,
}

/// Body of `POST /searchQuestions`.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}

// ---------------------------------------------------------------------------
// Response payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct QuestionPage {
    pub questions: Vec<QuestionView>,
    pub total_questions: usize,
    pub categories: Vec<String>,
    pub current_category: Option<DbId>,
}

#[derive(Debug, Serialize)]
pub struct QuestionCreated {
    pub created: DbId,
}

#[derive(Debug, Serialize)]
pub struct QuestionDeleted {
    pub deleted: DbId,
    pub questions: Vec<QuestionView>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub questions: Vec<QuestionView>,
    pub total_questions: usize,
    pub current_category: Option<DbId>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /questions?page=
///
/// One page of all questions plus the category names. 404 if the page is empty.
pub async fn list_questions(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let selection = QuestionRepo::list(&state.pool).await?;
    let total_questions = selection.len();

    let page = params.page();
    let questions = paginate(format_all(&selection), page);
    if questions.is_empty() {
        return Err(AppError::NotFound(format!("question page {page}")));
    }

    let categories = CategoryRepo::list(&state.pool).await?;

    Ok(Success::new(QuestionPage {
        questions,
        total_questions,
        categories: categories.into_iter().map(|c| c.kind).collect(),
        current_category: None,
    }))
}

/// POST /questions
///
/// Create a question. Question and answer text are required; the category
/// index is shifted to the stored category id.
pub async fn create_question(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateQuestionRequest>,
) -> AppResult<impl IntoResponse> {
    let (question, answer) = validate_question_text(input.question, input.answer)?;
    let category = input
        .category
        .map(|index| {
            category_id_from_index(index)
                .ok_or_else(|| CoreError::Validation(format!("Category {index} is out of range")))
        })
        .transpose()?;

    let create = CreateQuestion {
        question,
        answer,
        category,
        difficulty: difficulty_from(input.difficulty)?,
    };
    let created = QuestionRepo::create(&state.pool, &create).await?;

    tracing::info!(
        question_id = created.id,
        category = ?created.category,
        "Question created",
    );

    Ok(Success::new(QuestionCreated { created: created.id }))
}

/// DELETE /questions/{id}?page=
///
/// Delete a question and return the requested page of what remains.
pub async fn delete_question(
    State(state): State<AppState>,
    AppPath(question_id): AppPath<DbId>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    QuestionRepo::find_by_id(&state.pool, question_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Question",
            id: question_id,
        })?;

    if !QuestionRepo::delete(&state.pool, question_id).await? {
        return Err(CoreError::NotFound {
            entity: "Question",
            id: question_id,
        }
        .into());
    }

    tracing::info!(question_id, "Question deleted");

    let remaining = QuestionRepo::list(&state.pool).await?;

    Ok(Success::new(QuestionDeleted {
        deleted: question_id,
        questions: paginate(format_all(&remaining), params.page()),
        total_questions: remaining.len(),
    }))
}

/// POST /searchQuestions?page=
///
/// Case-insensitive substring search on the question text. An empty or
/// missing term returns every question. An empty page is not an error.
/// `total_questions` counts every match, not just the returned page.
pub async fn search_questions(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
    AppJson(input): AppJson<SearchRequest>,
) -> AppResult<impl IntoResponse> {
    let term = input.search_term.unwrap_or_default();
    let selection = QuestionRepo::search(&state.pool, &term).await?;
    let total_questions = selection.len();

    tracing::debug!(term = %term, matches = total_questions, "Question search");

    Ok(Success::new(SearchResults {
        questions: paginate(format_all(&selection), params.page()),
        total_questions,
        current_category: None,
    }))
}

fn format_all(questions: &[Question]) -> Vec<QuestionView> {
    questions.iter().map(Question::format).collect()
}
