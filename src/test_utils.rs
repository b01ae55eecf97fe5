use crate::models::domain::{AnswerChoice, Question, Quiz};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// Two yes/no questions whose correct indices are `[0, 1]`.
    pub fn two_question_quiz() -> Quiz {
        Quiz::new(
            "owner-1",
            "Pair",
            vec![
                Question::new("One?", &["yes", "no"], 0),
                Question::new("Two?", &["yes", "no"], 1),
            ],
        )
    }

    /// Questions with two, three and two answers respectively.
    pub fn uneven_quiz() -> Quiz {
        Quiz::new(
            "owner-1",
            "Basics",
            vec![
                Question::new("First?", &["a", "b"], 0),
                Question::new("Second?", &["a", "b", "c"], 1),
                Question::new("Third?", &["a", "b"], 1),
            ],
        )
    }

    pub fn choices(values: &[i64]) -> Vec<AnswerChoice> {
        values.iter().copied().map(AnswerChoice::new).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_two_question_quiz() {
        let quiz = two_question_quiz();
        assert_eq!(quiz.question_count(), 2);
        assert_eq!(quiz.questions[1].correct_answer_index, 1);
    }

    #[test]
    fn test_fixtures_choices() {
        let answers = choices(&[3, -1]);
        assert_eq!(answers.len(), 2);
        assert_eq!(answers[1].choice, -1);
    }
}
