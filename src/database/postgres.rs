use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::database::repository::{ChoiceRepository, QuestionRepository};
use crate::error::Result;
use crate::models::{choice::Choice, question::Question};

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionRepository for PgStore {
    async fn create(&self, question_text: &str, pub_date: DateTime<Utc>) -> Result<Question> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question_text, pub_date)
            VALUES ($1, $2)
            RETURNING id, question_text, pub_date
            "#,
        )
        .bind(question_text)
        .bind(pub_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(question)
    }

    async fn list_all(&self) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question_text, pub_date
            FROM questions
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question_text, pub_date
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }
}

#[async_trait]
impl ChoiceRepository for PgStore {
    async fn create_choice(&self, question_id: i64, choice_text: &str) -> Result<Choice> {
        let choice = sqlx::query_as::<_, Choice>(
            r#"
            INSERT INTO choices (question_id, choice_text)
            VALUES ($1, $2)
            RETURNING id, question_id, choice_text, votes
            "#,
        )
        .bind(question_id)
        .bind(choice_text)
        .fetch_one(&self.pool)
        .await?;

        Ok(choice)
    }

    async fn list_choices(&self, question_id: i64) -> Result<Vec<Choice>> {
        let choices = sqlx::query_as::<_, Choice>(
            r#"
            SELECT id, question_id, choice_text, votes
            FROM choices
            WHERE question_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(question_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(choices)
    }

    async fn increment_votes(&self, question_id: i64, choice_id: i64) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE choices
            SET votes = votes + 1
            WHERE id = $1 AND question_id = $2
            "#,
        )
        .bind(choice_id)
        .bind(question_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }
}
