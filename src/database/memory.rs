use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::database::repository::{ChoiceRepository, QuestionRepository};
use crate::error::{Error, Result};
use crate::models::{choice::Choice, question::Question};

#[derive(Debug, Default)]
struct Tables {
    questions: Vec<Question>,
    choices: Vec<Choice>,
    last_question_id: i64,
    last_choice_id: i64,
}

/// Process-local store used when no database is configured, and by tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuestionRepository for MemoryStore {
    async fn create(&self, question_text: &str, pub_date: DateTime<Utc>) -> Result<Question> {
        let mut tables = self.tables.write().await;
        tables.last_question_id += 1;
        let question = Question {
            id: tables.last_question_id,
            question_text: question_text.to_string(),
            pub_date,
        };
        tables.questions.push(question.clone());
        Ok(question)
    }

    async fn list_all(&self) -> Result<Vec<Question>> {
        Ok(self.tables.read().await.questions.clone())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Question>> {
        let tables = self.tables.read().await;
        Ok(tables.questions.iter().find(|q| q.id == id).cloned())
    }
}

#[async_trait]
impl ChoiceRepository for MemoryStore {
    async fn create_choice(&self, question_id: i64, choice_text: &str) -> Result<Choice> {
        let mut tables = self.tables.write().await;
        if !tables.questions.iter().any(|q| q.id == question_id) {
            return Err(Error::question_not_found());
        }
        tables.last_choice_id += 1;
        let choice = Choice {
            id: tables.last_choice_id,
            question_id,
            choice_text: choice_text.to_string(),
            votes: 0,
        };
        tables.choices.push(choice.clone());
        Ok(choice)
    }

    async fn list_choices(&self, question_id: i64) -> Result<Vec<Choice>> {
        let tables = self.tables.read().await;
        Ok(tables
            .choices
            .iter()
            .filter(|c| c.question_id == question_id)
            .cloned()
            .collect())
    }

    async fn increment_votes(&self, question_id: i64, choice_id: i64) -> Result<bool> {
        let mut tables = self.tables.write().await;
        match tables
            .choices
            .iter_mut()
            .find(|c| c.id == choice_id && c.question_id == question_id)
        {
            Some(choice) => {
                choice.votes += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
