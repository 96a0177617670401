use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i64,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

/// Where a question stands relative to a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Pending,
    Visible,
}

impl Question {
    /// Unsaved question, for checks that never touch a store.
    pub fn new(question_text: impl Into<String>, pub_date: DateTime<Utc>) -> Self {
        Self {
            id: 0,
            question_text: question_text.into(),
            pub_date,
        }
    }

    /// True when `pub_date` lies in `[now - 1 day, now]`. Both ends inclusive.
    pub fn was_published_recently(&self, now: DateTime<Utc>) -> bool {
        now - Duration::days(1) <= self.pub_date && self.pub_date <= now
    }

    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        self.pub_date <= now
    }

    pub fn visibility(&self, now: DateTime<Utc>) -> Visibility {
        if self.is_visible_at(now) {
            Visibility::Visible
        } else {
            Visibility::Pending
        }
    }
}
