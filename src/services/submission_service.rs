use std::{fmt, sync::Arc};

use chrono::{DateTime, Utc};

use crate::{
    errors::{AppError, AppResult, LinkTarget},
    models::{
        domain::{AnswerChoice, Quiz, QuizResult, SubmissionError, SubmissionOutcome},
        dto::SubmitAnswersRequest,
    },
    repositories::{AggregateLinker, QuizRepository, QuizResultRepository},
    services::{
        duplicate_guard::DuplicateGuard, response_validator::ResponseValidator,
        scoring_engine::ScoringEngine,
    },
};

/// Where a submission is in its step sequence. `Persisted` without
/// `Linked` is the state a failed link leaves behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStage {
    Received,
    DuplicateRejected,
    ValidationRejected,
    Scored,
    Persisted,
    Linked,
}

impl fmt::Display for SubmissionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionStage::Received => write!(f, "received"),
            SubmissionStage::DuplicateRejected => write!(f, "duplicate_rejected"),
            SubmissionStage::ValidationRejected => write!(f, "validation_rejected"),
            SubmissionStage::Scored => write!(f, "scored"),
            SubmissionStage::Persisted => write!(f, "persisted"),
            SubmissionStage::Linked => write!(f, "linked"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconcileReport {
    pub linked: usize,
    pub failed: usize,
}

pub struct SubmissionService {
    quizzes: Arc<dyn QuizRepository>,
    results: Arc<dyn QuizResultRepository>,
    linker: Arc<dyn AggregateLinker>,
    duplicate_guard: DuplicateGuard,
}

impl SubmissionService {
    pub fn new(
        quizzes: Arc<dyn QuizRepository>,
        results: Arc<dyn QuizResultRepository>,
        linker: Arc<dyn AggregateLinker>,
        duplicate_guard: DuplicateGuard,
    ) -> Self {
        Self {
            quizzes,
            results,
            linker,
            duplicate_guard,
        }
    }

    pub async fn submit(
        &self,
        quiz_id: &str,
        user_id: Option<&str>,
        request: SubmitAnswersRequest,
    ) -> AppResult<SubmissionOutcome> {
        let quiz = self
            .quizzes
            .find_by_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", quiz_id)))?;

        self.submit_to_quiz(&quiz, user_id, &request.answers).await
    }

    /// Grade and record a submission for an already resolved quiz.
    ///
    /// Policy and validation rejections come back as `Ok(Rejected)` with
    /// nothing stored. Storage failures are `Err`; a failure after the
    /// result was stored is `AppError::PartialLink`.
    pub async fn submit_to_quiz(
        &self,
        quiz: &Quiz,
        user_id: Option<&str>,
        answers: &[AnswerChoice],
    ) -> AppResult<SubmissionOutcome> {
        log_stage(&quiz.id, SubmissionStage::Received);

        if self.duplicate_guard.has_existing_result(quiz, user_id).await? {
            log_stage(&quiz.id, SubmissionStage::DuplicateRejected);
            log::info!(
                "Rejected duplicate submission for quiz {} by user {}",
                quiz.id,
                user_id.unwrap_or("anonymous")
            );
            return Ok(SubmissionOutcome::rejected(vec![SubmissionError::Duplicate]));
        }

        let validation = ResponseValidator::validate(quiz, answers);
        if !validation.is_valid() {
            log_stage(&quiz.id, SubmissionStage::ValidationRejected);
            log::info!(
                "Rejected submission for quiz {} with {} validation error(s)",
                quiz.id,
                validation.errors.len()
            );
            return Ok(SubmissionOutcome::rejected(validation.errors));
        }

        let scored = ScoringEngine::score(quiz, answers);
        log_stage(&quiz.id, SubmissionStage::Scored);

        let result = QuizResult::new(quiz, user_id, scored.answers, scored.score);
        let exclusive = result.exclusive;
        let result = match self.results.create(result).await {
            Ok(result) => result,
            Err(AppError::AlreadyExists(_)) if exclusive => {
                log_stage(&quiz.id, SubmissionStage::DuplicateRejected);
                log::info!(
                    "Storage rejected concurrent duplicate submission for quiz {}",
                    quiz.id
                );
                return Ok(SubmissionOutcome::rejected(vec![SubmissionError::Duplicate]));
            }
            Err(err) => return Err(err),
        };
        log_stage(&quiz.id, SubmissionStage::Persisted);

        self.link(&result).await?;
        log_stage(&quiz.id, SubmissionStage::Linked);

        log::info!(
            "Recorded result {} for quiz {} with score {:.3}",
            result.id,
            quiz.id,
            result.score
        );
        Ok(SubmissionOutcome::Accepted {
            result_id: result.id,
        })
    }

    /// Re-apply the aggregate links of a stored result. Safe to repeat.
    pub async fn link_result(&self, result_id: &str) -> AppResult<()> {
        let result = self
            .results
            .find_by_id(result_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Result with id '{}' not found", result_id))
            })?;

        self.link(&result).await
    }

    /// Re-link every result submitted since `since`. Individual failures
    /// are counted and do not stop the pass.
    pub async fn reconcile_since(&self, since: DateTime<Utc>) -> AppResult<ReconcileReport> {
        let results = self.results.find_submitted_since(since).await?;
        let mut report = ReconcileReport::default();

        for result in &results {
            match self.link(result).await {
                Ok(()) => report.linked += 1,
                Err(err) => {
                    log::warn!("Could not reconcile result {}: {}", result.id, err);
                    report.failed += 1;
                }
            }
        }

        Ok(report)
    }

    async fn link(&self, result: &QuizResult) -> AppResult<()> {
        self.linker
            .add_result_to_quiz(&result.quiz_id, &result.id)
            .await
            .map_err(|err| unlinked(result, LinkTarget::Quiz, err))?;

        if let Some(user_id) = &result.user_id {
            self.linker
                .add_result_to_user(user_id, &result.id)
                .await
                .map_err(|err| unlinked(result, LinkTarget::User, err))?;
        }

        Ok(())
    }
}

fn log_stage(quiz_id: &str, stage: SubmissionStage) {
    log::debug!("Submission for quiz {} reached stage {}", quiz_id, stage);
}

fn unlinked(result: &QuizResult, target: LinkTarget, err: AppError) -> AppError {
    log::error!(
        "Result {} stored but not linked to {}: {}",
        result.id,
        target,
        err
    );
    AppError::partial_link(&result.id, target, err)
}
