use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::{choice::Choice, question::Question};

/// Persistence for questions. Implementations assign ids and never apply
/// visibility rules; filtering by publication date happens above this layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn create(&self, question_text: &str, pub_date: DateTime<Utc>) -> Result<Question>;

    async fn list_all(&self) -> Result<Vec<Question>>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Question>>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChoiceRepository: Send + Sync {
    async fn create_choice(&self, question_id: i64, choice_text: &str) -> Result<Choice>;

    /// Choices of one question, oldest first.
    async fn list_choices(&self, question_id: i64) -> Result<Vec<Choice>>;

    /// Adds one vote. Returns `false` if `choice_id` does not belong to
    /// `question_id`.
    async fn increment_votes(&self, question_id: i64, choice_id: i64) -> Result<bool>;
}
