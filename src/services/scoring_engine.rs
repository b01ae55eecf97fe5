use crate::models::domain::{AnswerChoice, Quiz, ResultAnswer};

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSubmission {
    pub answers: Vec<ResultAnswer>,
    /// Fraction of questions answered correctly, in `[0, 1]`.
    pub score: f64,
}

pub struct ScoringEngine;

impl ScoringEngine {
    /// Grade a submission that already passed `ResponseValidator`.
    ///
    /// Every question weighs `1/N`. A quiz with no questions scores `0.0`.
    /// The correct index is copied into each answer only when the quiz
    /// shows correct answers.
    pub fn score(quiz: &Quiz, answers: &[AnswerChoice]) -> ScoredSubmission {
        let graded: Vec<ResultAnswer> = quiz
            .questions
            .iter()
            .zip(answers)
            .map(|(question, answer)| ResultAnswer {
                choice: answer.choice,
                is_correct: answer.choice == question.correct_answer_index,
                correct_answer: quiz
                    .show_correct_answers
                    .then_some(question.correct_answer_index),
            })
            .collect();

        let total = quiz.questions.len();
        let score = if total == 0 {
            0.0
        } else {
            let correct = graded.iter().filter(|a| a.is_correct).count();
            correct as f64 / total as f64
        };

        ScoredSubmission {
            answers: graded,
            score,
        }
    }
}
