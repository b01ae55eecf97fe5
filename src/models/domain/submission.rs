use std::fmt;

use serde::{Deserialize, Serialize};

/// One respondent choice, positionally matched to a quiz question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnswerChoice {
    pub choice: i64,
}

impl AnswerChoice {
    pub fn new(choice: i64) -> Self {
        AnswerChoice { choice }
    }
}

/// User-facing reasons a submission was turned away. These travel back to
/// the caller as data; they never become an `AppError`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionError {
    /// The user already has a result for a single-response quiz.
    Duplicate,
    /// The number of answers differs from the number of questions.
    AnswerCountMismatch,
    /// The choice at this zero-based question index is not a valid answer.
    AnswerIndexOutOfRange(usize),
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::Duplicate => write!(f, "duplicate"),
            SubmissionError::AnswerCountMismatch => write!(f, "answers"),
            SubmissionError::AnswerIndexOutOfRange(index) => write!(f, "answer {}", index + 1),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The result was persisted and linked to the quiz and user.
    Accepted { result_id: String },
    /// Nothing was persisted.
    Rejected { errors: Vec<SubmissionError> },
}

impl SubmissionOutcome {
    pub fn rejected(errors: Vec<SubmissionError>) -> Self {
        SubmissionOutcome::Rejected { errors }
    }

    pub fn result_id(&self) -> Option<&str> {
        match self {
            SubmissionOutcome::Accepted { result_id } => Some(result_id),
            SubmissionOutcome::Rejected { .. } => None,
        }
    }

    pub fn errors(&self) -> &[SubmissionError] {
        match self {
            SubmissionOutcome::Accepted { .. } => &[],
            SubmissionOutcome::Rejected { errors } => errors,
        }
    }

    /// Error list in wire form, e.g. `["answer 1", "answer 3"]`.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors().iter().map(ToString::to_string).collect()
    }
}
