use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::Quiz;

/// The graded record of one accepted submission.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct QuizResult {
    pub id: String,
    pub quiz_id: String,
    pub quiz_owner_id: String,
    pub user_id: Option<String>,
    pub answers: Vec<ResultAnswer>,
    pub score: f64,
    /// Set for results that fall under the one-per-user rule. The storage
    /// layer keeps `(quiz_id, user_id)` unique among exclusive results.
    #[serde(default)]
    pub exclusive: bool,
    /// Stored as a BSON datetime so range queries and sorts compare instants.
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub submitted_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResultAnswer {
    pub choice: i64,
    pub is_correct: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<i64>,
}

impl QuizResult {
    pub fn new(quiz: &Quiz, user_id: Option<&str>, answers: Vec<ResultAnswer>, score: f64) -> Self {
        QuizResult {
            id: Uuid::new_v4().to_string(),
            quiz_id: quiz.id.clone(),
            quiz_owner_id: quiz.owner_id.clone(),
            user_id: user_id.map(str::to_string),
            answers,
            score,
            exclusive: !quiz.allow_multiple_responses && user_id.is_some(),
            // BSON datetimes keep millisecond precision.
            submitted_at: Utc::now().trunc_subsecs(3),
        }
    }

    pub fn correct_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_correct).count()
    }
}
