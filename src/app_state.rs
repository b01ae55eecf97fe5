use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        AggregateLinker, MongoAggregateLinker, MongoQuizRepository, MongoQuizResultRepository,
        QuizResultRepository,
    },
    services::{DuplicateGuard, QuizResultService, SubmissionService},
};

#[derive(Clone)]
pub struct AppState {
    pub submission_service: Arc<SubmissionService>,
    pub quiz_result_service: Arc<QuizResultService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let quiz_repository = Arc::new(MongoQuizRepository::new(&db, &config.quizzes_collection));
        quiz_repository.ensure_indexes().await?;

        let result_repository = Arc::new(MongoQuizResultRepository::new(
            &db,
            &config.results_collection,
        ));
        result_repository.ensure_indexes().await?;
        let result_repository: Arc<dyn QuizResultRepository> = result_repository;

        let linker: Arc<dyn AggregateLinker> = Arc::new(MongoAggregateLinker::new(
            &db,
            &config.quizzes_collection,
            &config.users_collection,
        ));

        let duplicate_guard = DuplicateGuard::new(result_repository.clone(), config.duplicate_check);
        let submission_service = Arc::new(SubmissionService::new(
            quiz_repository,
            result_repository.clone(),
            linker.clone(),
            duplicate_guard,
        ));
        let quiz_result_service = Arc::new(QuizResultService::new(result_repository, linker));

        Ok(Self {
            submission_service,
            quiz_result_service,
            config: Arc::new(config),
        })
    }
}
