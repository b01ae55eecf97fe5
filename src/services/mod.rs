pub mod duplicate_guard;
pub mod quiz_result_service;
pub mod response_validator;
pub mod scoring_engine;
pub mod submission_service;

pub use duplicate_guard::DuplicateGuard;
pub use quiz_result_service::QuizResultService;
pub use response_validator::{ResponseValidator, ValidationOutcome};
pub use scoring_engine::{ScoredSubmission, ScoringEngine};
pub use submission_service::{ReconcileReport, SubmissionService, SubmissionStage};
