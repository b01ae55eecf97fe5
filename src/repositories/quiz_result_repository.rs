use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, DateTime as BsonDateTime},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::QuizResult,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizResultRepository: Send + Sync {
    /// Inserts a result. Fails with `AlreadyExists` when an exclusive result
    /// for the same `(quiz_id, user_id)` is already stored.
    async fn create(&self, result: QuizResult) -> AppResult<QuizResult>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizResult>>;
    /// Most recent result the user has for the quiz.
    async fn find_by_user_and_quiz(
        &self,
        user_id: &str,
        quiz_id: &str,
    ) -> AppResult<Option<QuizResult>>;
    async fn find_submitted_since(&self, since: DateTime<Utc>) -> AppResult<Vec<QuizResult>>;
    async fn delete(&self, id: &str) -> AppResult<()>;
}

pub struct MongoQuizResultRepository {
    collection: Collection<QuizResult>,
}

impl MongoQuizResultRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for results collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        // Backstop for the duplicate check: two racing submissions to a
        // single-response quiz cannot both be stored.
        let exclusive_index = IndexModel::builder()
            .keys(doc! { "quiz_id": 1, "user_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .partial_filter_expression(doc! { "exclusive": true })
                    .name("quiz_user_exclusive".to_string())
                    .build(),
            )
            .build();

        let user_id_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder().name("user_id".to_string()).build())
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(exclusive_index).await?;
        self.collection.create_index(user_id_index).await?;

        log::info!("Successfully created indexes for results collection");
        Ok(())
    }
}

#[async_trait]
impl QuizResultRepository for MongoQuizResultRepository {
    async fn create(&self, result: QuizResult) -> AppResult<QuizResult> {
        self.collection.insert_one(&result).await?;
        Ok(result)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizResult>> {
        let result = self.collection.find_one(doc! { "id": id }).await?;
        Ok(result)
    }

    async fn find_by_user_and_quiz(
        &self,
        user_id: &str,
        quiz_id: &str,
    ) -> AppResult<Option<QuizResult>> {
        let result = self
            .collection
            .find_one(doc! {
                "user_id": user_id,
                "quiz_id": quiz_id
            })
            .sort(doc! { "submitted_at": -1 })
            .await?;
        Ok(result)
    }

    async fn find_submitted_since(&self, since: DateTime<Utc>) -> AppResult<Vec<QuizResult>> {
        let since = BsonDateTime::from_chrono(since);

        let results = self
            .collection
            .find(doc! { "submitted_at": { "$gte": since } })
            .sort(doc! { "submitted_at": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(results)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "Result with id '{}' not found",
                id
            )));
        }

        Ok(())
    }
}
