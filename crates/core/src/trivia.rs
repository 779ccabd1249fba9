//! Trivia question rules and the category index offset.
//!
//! The trivia frontend addresses categories by their zero-based position in
//! the `GET /categories` list, while category rows are numbered from 1. The
//! offset is applied at the API boundary in the same places the frontend
//! expects it, and nowhere else.

use crate::error::CoreError;
use crate::types::DbId;

/// Difference between a stored category id and the frontend's category index.
pub const CATEGORY_ID_OFFSET: DbId = 1;

/// `quiz_category.type` value meaning "questions from every category".
pub const QUIZ_ALL_CATEGORIES: &str = "click";

/// Stored category id for a frontend category index.
///
/// `None` when the index is so large that no stored id can match it.
pub fn category_id_from_index(index: DbId) -> Option<DbId> {
    index.checked_add(CATEGORY_ID_OFFSET)
}

/// Value reported as `current_category` by the per-category listing.
///
/// Subtracts the offset from the path id. The frontend consumes this value
/// as-is, so it is reported unchanged from earlier releases. `None` on
/// underflow.
pub fn reported_current_category(path_id: DbId) -> Option<DbId> {
    path_id.checked_sub(CATEGORY_ID_OFFSET)
}

/// Require the text fields of a new question.
///
/// Both must be present and non-empty. Returns `(question, answer)`.
pub fn validate_question_text(
    question: Option<String>,
    answer: Option<String>,
) -> Result<(String, String), CoreError> {
    let question = question
        .filter(|q| !q.is_empty())
        .ok_or_else(|| CoreError::Validation("Question text is required".into()))?;
    let answer = answer
        .filter(|a| !a.is_empty())
        .ok_or_else(|| CoreError::Validation("Answer text is required".into()))?;
    Ok((question, answer))
}

/// Narrow a client-supplied difficulty to the stored integer width.
pub fn difficulty_from(value: Option<i64>) -> Result<Option<i32>, CoreError> {
    value
        .map(|v| {
            i32::try_from(v)
                .map_err(|_| CoreError::Validation(format!("Difficulty {v} is out of range")))
        })
        .transpose()
}
