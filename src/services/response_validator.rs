use crate::models::domain::{AnswerChoice, Quiz, SubmissionError};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationOutcome {
    pub errors: Vec<SubmissionError>,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

pub struct ResponseValidator;

impl ResponseValidator {
    /// Check the shape of a submission against the quiz.
    ///
    /// A count mismatch is reported on its own. Otherwise every question is
    /// checked and each out-of-range choice is reported once.
    pub fn validate(quiz: &Quiz, answers: &[AnswerChoice]) -> ValidationOutcome {
        if answers.len() != quiz.questions.len() {
            return ValidationOutcome {
                errors: vec![SubmissionError::AnswerCountMismatch],
            };
        }

        let errors = quiz
            .questions
            .iter()
            .zip(answers)
            .enumerate()
            .filter(|(_, (question, answer))| !question.has_choice(answer.choice))
            .map(|(index, _)| SubmissionError::AnswerIndexOutOfRange(index))
            .collect();

        ValidationOutcome { errors }
    }
}
