use async_trait::async_trait;
use mongodb::{
    bson::{doc, Document},
    Collection,
};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{Quiz, User},
};

/// Records result ids on the quiz and user documents.
///
/// Adds are set-inserts, so repeating one is a no-op. Updating an aggregate
/// that does not exist is `NotFound`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AggregateLinker: Send + Sync {
    async fn add_result_to_quiz(&self, quiz_id: &str, result_id: &str) -> AppResult<()>;
    async fn add_result_to_user(&self, user_id: &str, result_id: &str) -> AppResult<()>;
    async fn remove_result_from_quiz(&self, quiz_id: &str, result_id: &str) -> AppResult<()>;
    async fn remove_result_from_user(&self, user_id: &str, result_id: &str) -> AppResult<()>;
}

pub struct MongoAggregateLinker {
    quizzes: Collection<Quiz>,
    users: Collection<User>,
}

impl MongoAggregateLinker {
    pub fn new(db: &Database, quizzes_collection: &str, users_collection: &str) -> Self {
        Self {
            quizzes: db.get_collection(quizzes_collection),
            users: db.get_collection(users_collection),
        }
    }
}

async fn update_aggregate<T>(
    collection: &Collection<T>,
    kind: &str,
    id: &str,
    update: Document,
) -> AppResult<()>
where
    T: Send + Sync,
{
    let result = collection.update_one(doc! { "id": id }, update).await?;

    if result.matched_count == 0 {
        return Err(AppError::NotFound(format!(
            "{} with id '{}' not found",
            kind, id
        )));
    }

    Ok(())
}

#[async_trait]
impl AggregateLinker for MongoAggregateLinker {
    async fn add_result_to_quiz(&self, quiz_id: &str, result_id: &str) -> AppResult<()> {
        update_aggregate(
            &self.quizzes,
            "Quiz",
            quiz_id,
            doc! { "$addToSet": { "result_ids": result_id } },
        )
        .await
    }

    async fn add_result_to_user(&self, user_id: &str, result_id: &str) -> AppResult<()> {
        update_aggregate(
            &self.users,
            "User",
            user_id,
            doc! { "$addToSet": { "result_ids": result_id } },
        )
        .await
    }

    async fn remove_result_from_quiz(&self, quiz_id: &str, result_id: &str) -> AppResult<()> {
        update_aggregate(
            &self.quizzes,
            "Quiz",
            quiz_id,
            doc! { "$pull": { "result_ids": result_id } },
        )
        .await
    }

    async fn remove_result_from_user(&self, user_id: &str, result_id: &str) -> AppResult<()> {
        update_aggregate(
            &self.users,
            "User",
            user_id,
            doc! { "$pull": { "result_ids": result_id } },
        )
        .await
    }
}
