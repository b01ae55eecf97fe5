use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::quiz_question::Question;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub questions: Vec<Question>,
    #[serde(default)]
    pub allow_multiple_responses: bool,
    #[serde(default)]
    pub show_correct_answers: bool,
    #[serde(default)]
    pub is_public: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<DateTime<Utc>>,
    /// Ids of results recorded against this quiz, kept as a set.
    #[serde(default)]
    pub result_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Quiz {
    pub fn new(owner_id: &str, title: &str, questions: Vec<Question>) -> Self {
        Quiz {
            id: Uuid::new_v4().to_string(),
            owner_id: owner_id.to_string(),
            title: title.to_string(),
            questions,
            allow_multiple_responses: false,
            show_correct_answers: false,
            is_public: false,
            expiration: None,
            result_ids: Vec::new(),
            created_at: Some(Utc::now()),
        }
    }

    pub fn with_multiple_responses(mut self, allow: bool) -> Self {
        self.allow_multiple_responses = allow;
        self
    }

    pub fn with_correct_answers_shown(mut self, show: bool) -> Self {
        self.show_correct_answers = show;
        self
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}
