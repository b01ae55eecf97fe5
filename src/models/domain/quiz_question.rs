use serde::{Deserialize, Serialize};

/// A single answer choice. Its identity is its position in `Question::answers`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Answer {
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub text: String,
    pub answers: Vec<Answer>,
    /// Index into `answers`, checked when the quiz is authored.
    pub correct_answer_index: i64,
}

impl Question {
    pub fn new(text: &str, answers: &[&str], correct_answer_index: i64) -> Self {
        Question {
            text: text.to_string(),
            answers: answers
                .iter()
                .map(|text| Answer {
                    text: text.to_string(),
                })
                .collect(),
            correct_answer_index,
        }
    }

    /// Whether `choice` names one of this question's answers.
    pub fn has_choice(&self, choice: i64) -> bool {
        usize::try_from(choice)
            .map(|index| index < self.answers.len())
            .unwrap_or(false)
    }
}
