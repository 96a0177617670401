use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{choice::Choice, question::Question};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionPayload {
    #[validate(length(min = 1, max = 200))]
    pub question_text: String,
    /// Defaults to the time of the request.
    pub pub_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateChoicePayload {
    #[validate(length(min = 1, max = 200))]
    pub choice_text: String,
}

/// Raw vote form. `choice` stays a string so that a blank or garbled value
/// reaches the handler instead of failing extraction.
#[derive(Debug, Clone, Deserialize)]
pub struct VoteForm {
    pub choice: Option<String>,
}

impl VoteForm {
    pub fn choice_id(&self) -> Option<i64> {
        self.choice.as_deref()?.trim().parse().ok()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChoiceResponse {
    pub id: i64,
    pub question_id: i64,
    pub choice_text: String,
    pub votes: i32,
}

impl From<Choice> for ChoiceResponse {
    fn from(c: Choice) -> Self {
        Self {
            id: c.id,
            question_id: c.question_id,
            choice_text: c.choice_text,
            votes: c.votes,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionResponse {
    pub id: i64,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
    pub was_published_recently: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<ChoiceResponse>>,
}

impl QuestionResponse {
    pub fn at(question: Question, now: DateTime<Utc>) -> Self {
        Self {
            was_published_recently: question.was_published_recently(now),
            id: question.id,
            question_text: question.question_text,
            pub_date: question.pub_date,
            choices: None,
        }
    }

    pub fn with_choices(mut self, choices: Vec<Choice>) -> Self {
        self.choices = Some(choices.into_iter().map(Into::into).collect());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionListResponse {
    pub latest_question_list: Vec<QuestionResponse>,
}
