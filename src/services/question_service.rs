use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::database::repository::{ChoiceRepository, QuestionRepository};
use crate::error::{Error, Result};
use crate::models::{choice::Choice, question::Question};
use crate::utils::time::Clock;

#[derive(Clone)]
pub struct QuestionService {
    questions: Arc<dyn QuestionRepository>,
    choices: Arc<dyn ChoiceRepository>,
    clock: Arc<dyn Clock>,
}

pub enum VoteOutcome {
    Recorded(Question),
    /// No choice submitted, or the choice belongs to another question.
    NoChoice(Question, Vec<Choice>),
}

/// Questions published at or before `now`, newest first. Equal dates keep
/// the most recently created question first.
pub fn visible_questions(mut all: Vec<Question>, now: DateTime<Utc>) -> Vec<Question> {
    all.retain(|q| q.is_visible_at(now));
    all.sort_by(|a, b| b.pub_date.cmp(&a.pub_date).then_with(|| b.id.cmp(&a.id)));
    all
}

impl QuestionService {
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        choices: Arc<dyn ChoiceRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            questions,
            choices,
            clock,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub async fn create(
        &self,
        question_text: &str,
        pub_date: Option<DateTime<Utc>>,
    ) -> Result<Question> {
        let pub_date = pub_date.unwrap_or_else(|| self.now());
        let question = self.questions.create(question_text, pub_date).await?;
        info!(question_id = question.id, %pub_date, "question created");
        Ok(question)
    }

    pub async fn latest(&self) -> Result<Vec<Question>> {
        let all = self.questions.list_all().await?;
        Ok(visible_questions(all, self.now()))
    }

    /// Looks a question up by id, hiding anything not yet published.
    pub async fn get_visible(&self, id: i64) -> Result<Question> {
        let now = self.now();
        match self.questions.get_by_id(id).await? {
            Some(question) if question.is_visible_at(now) => Ok(question),
            Some(_) => {
                debug!(question_id = id, "question is still pending");
                Err(Error::question_not_found())
            }
            None => Err(Error::question_not_found()),
        }
    }

    pub async fn get_visible_with_choices(&self, id: i64) -> Result<(Question, Vec<Choice>)> {
        let question = self.get_visible(id).await?;
        let choices = self.choices.list_choices(question.id).await?;
        Ok((question, choices))
    }

    /// Only published questions accept choices, so an unknown id and a
    /// pending one answer the same way.
    pub async fn add_choice(&self, question_id: i64, choice_text: &str) -> Result<Choice> {
        let question = self.get_visible(question_id).await?;
        let choice = self.choices.create_choice(question.id, choice_text).await?;
        info!(question_id, choice_id = choice.id, "choice created");
        Ok(choice)
    }

    pub async fn vote(&self, question_id: i64, choice_id: Option<i64>) -> Result<VoteOutcome> {
        let question = self.get_visible(question_id).await?;

        let recorded = match choice_id {
            Some(choice_id) => self.choices.increment_votes(question.id, choice_id).await?,
            None => false,
        };

        if recorded {
            debug!(question_id, ?choice_id, "vote recorded");
            Ok(VoteOutcome::Recorded(question))
        } else {
            let choices = self.choices.list_choices(question.id).await?;
            Ok(VoteOutcome::NoChoice(question, choices))
        }
    }
}
