use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::QuizResult,
    repositories::{AggregateLinker, QuizResultRepository},
};

pub struct QuizResultService {
    results: Arc<dyn QuizResultRepository>,
    linker: Arc<dyn AggregateLinker>,
}

impl QuizResultService {
    pub fn new(results: Arc<dyn QuizResultRepository>, linker: Arc<dyn AggregateLinker>) -> Self {
        Self { results, linker }
    }

    pub async fn get_result(&self, id: &str) -> AppResult<QuizResult> {
        self.results
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Result with id '{}' not found", id)))
    }

    pub async fn get_user_result_for_quiz(
        &self,
        user_id: &str,
        quiz_id: &str,
    ) -> AppResult<Option<QuizResult>> {
        self.results.find_by_user_and_quiz(user_id, quiz_id).await
    }

    /// Delete a result and drop its id from the quiz and user.
    pub async fn delete_result(&self, id: &str) -> AppResult<()> {
        let result = self.get_result(id).await?;

        self.results.delete(id).await?;

        // A stale id left on an aggregate resolves to no result.
        if let Err(err) = self.linker.remove_result_from_quiz(&result.quiz_id, id).await {
            log::warn!("Could not unlink result {} from quiz: {}", id, err);
        }
        if let Some(user_id) = &result.user_id {
            if let Err(err) = self.linker.remove_result_from_user(user_id, id).await {
                log::warn!("Could not unlink result {} from user: {}", id, err);
            }
        }

        log::info!("Deleted result {}", id);
        Ok(())
    }
}
