use std::sync::Arc;

use crate::{
    config::DuplicateCheckStrategy,
    errors::AppResult,
    models::domain::Quiz,
    repositories::QuizResultRepository,
};

/// Enforces one result per `(user, quiz)` on single-response quizzes.
///
/// The check and the later insert are not atomic. Racing submissions are
/// caught by the unique exclusive-result index in the results collection.
pub struct DuplicateGuard {
    results: Arc<dyn QuizResultRepository>,
    strategy: DuplicateCheckStrategy,
}

impl DuplicateGuard {
    pub fn new(results: Arc<dyn QuizResultRepository>, strategy: DuplicateCheckStrategy) -> Self {
        Self { results, strategy }
    }

    /// Whether `user_id` already has a result for `quiz`. Always false for
    /// anonymous submissions and for quizzes allowing multiple responses.
    pub async fn has_existing_result(&self, quiz: &Quiz, user_id: Option<&str>) -> AppResult<bool> {
        let Some(user_id) = user_id else {
            return Ok(false);
        };
        if quiz.allow_multiple_responses {
            return Ok(false);
        }

        match self.strategy {
            DuplicateCheckStrategy::Scan => self.scan_quiz_results(quiz, user_id).await,
            DuplicateCheckStrategy::Indexed => Ok(self
                .results
                .find_by_user_and_quiz(user_id, &quiz.id)
                .await?
                .is_some()),
        }
    }

    async fn scan_quiz_results(&self, quiz: &Quiz, user_id: &str) -> AppResult<bool> {
        for result_id in &quiz.result_ids {
            // A result deleted since it was linked is not a match.
            if let Some(result) = self.results.find_by_id(result_id).await? {
                if result.user_id.as_deref() == Some(user_id) {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }
}
