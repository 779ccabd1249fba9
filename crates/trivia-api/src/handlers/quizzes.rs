//! Handler for drawing the next quiz question.

use std::collections::HashSet;

use axum::extract::State;
use axum::response::IntoResponse;
use fsnd_core::lenient;
use fsnd_core::quiz::pick_unasked;
use fsnd_core::trivia::{category_id_from_index, QUIZ_ALL_CATEGORIES};
use fsnd_core::types::DbId;
use fsnd_db::models::question::{Question, QuestionView};
use fsnd_db::repositories::QuestionRepo;
use fsnd_http::envelope::Success;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

/// Category selector sent by the quiz frontend.
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_int")]
    pub id: Option<DbId>,
}

/// Body of `POST /quizzes`.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default, deserialize_with = "lenient::int_list")]
    pub previous_questions: Vec<DbId>,
    pub quiz_category: Option<QuizCategory>,
}

#[derive(Debug, Serialize)]
pub struct QuizQuestion {
    pub question: Option<QuestionView>,
}

/// POST /quizzes
///
/// A random question from the chosen category (or every category when the
/// type is `"click"`) that is not in `previous_questions`. Once all have been
/// asked, `question` is `null`.
pub async fn next_question(
    State(state): State<AppState>,
    AppJson(input): AppJson<QuizRequest>,
) -> AppResult<impl IntoResponse> {
    let category = input
        .quiz_category
        .ok_or_else(|| AppError::NotFound("quiz_category missing".into()))?;

    let candidates = if category.kind.as_deref() == Some(QUIZ_ALL_CATEGORIES) {
        QuestionRepo::list(&state.pool).await?
    } else {
        let index = category
            .id
            .ok_or_else(|| AppError::NotFound("quiz_category.id missing".into()))?;
        let category_id = category_id_from_index(index)
            .ok_or_else(|| AppError::NotFound(format!("quiz category index {index}")))?;
        QuestionRepo::list_by_category(&state.pool, category_id).await?
    };

    if candidates.is_empty() {
        return Err(AppError::NotFound("no quiz candidates".into()));
    }

    let asked: HashSet<DbId> = input.previous_questions.into_iter().collect();
    let question =
        pick_unasked(&candidates, &asked, |q| q.id, &mut rand::rng()).map(Question::format);

    tracing::debug!(
        candidates = candidates.len(),
        asked = asked.len(),
        picked = ?question.as_ref().map(|q| q.id),
        "Quiz question drawn",
    );

    Ok(Success::new(QuizQuestion { question }))
}
