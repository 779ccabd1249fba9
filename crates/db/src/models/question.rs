//! Trivia question models and DTOs.

use fsnd_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `questions` table.
#[derive(Debug, Clone, FromRow)]
pub struct Question {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    pub category: Option<DbId>,
    pub difficulty: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The public JSON shape of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    pub category: Option<DbId>,
    pub difficulty: Option<i32>,
}

impl Question {
    /// Format the row for API responses (audit columns omitted).
    pub fn format(&self) -> QuestionView {
        QuestionView {
            id: self.id,
            question: self.question.clone(),
            answer: self.answer.clone(),
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

/// Validated input for inserting a question.
///
/// `category` is the stored category id (offset already applied).
#[derive(Debug, Clone)]
pub struct CreateQuestion {
    pub question: String,
    pub answer: String,
    pub category: Option<DbId>,
    pub difficulty: Option<i32>,
}
