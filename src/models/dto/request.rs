use serde::Deserialize;

use crate::models::domain::AnswerChoice;

/// Body of a quiz submission: one `{ "choice": n }` per question, in order.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAnswersRequest {
    pub answers: Vec<AnswerChoice>,
}

impl SubmitAnswersRequest {
    pub fn new(choices: &[i64]) -> Self {
        SubmitAnswersRequest {
            answers: choices.iter().copied().map(AnswerChoice::new).collect(),
        }
    }
}
