#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use quizmark_server::{
    config::DuplicateCheckStrategy,
    errors::{AppError, AppResult},
    models::domain::{Question, Quiz, QuizResult, User},
    repositories::{AggregateLinker, QuizRepository, QuizResultRepository},
    services::{DuplicateGuard, QuizResultService, SubmissionService},
};

/// Quizzes, users and results behind one set of locks, standing in for the
/// three MongoDB collections.
#[derive(Default)]
pub struct InMemoryStore {
    quizzes: RwLock<HashMap<String, Quiz>>,
    users: RwLock<HashMap<String, User>>,
    results: RwLock<HashMap<String, QuizResult>>,
    fail_quiz_links: AtomicBool,
    fail_user_links: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub async fn insert_quiz(&self, quiz: Quiz) {
        self.quizzes.write().await.insert(quiz.id.clone(), quiz);
    }

    pub async fn insert_user(&self, user: User) {
        self.users.write().await.insert(user.id.clone(), user);
    }

    pub async fn quiz(&self, id: &str) -> Quiz {
        self.quizzes
            .read()
            .await
            .get(id)
            .cloned()
            .expect("quiz should exist")
    }

    pub async fn user(&self, id: &str) -> User {
        self.users
            .read()
            .await
            .get(id)
            .cloned()
            .expect("user should exist")
    }

    pub async fn result_count(&self) -> usize {
        self.results.read().await.len()
    }

    pub async fn results_for(&self, user_id: &str, quiz_id: &str) -> Vec<QuizResult> {
        self.results
            .read()
            .await
            .values()
            .filter(|r| r.user_id.as_deref() == Some(user_id) && r.quiz_id == quiz_id)
            .cloned()
            .collect()
    }

    pub fn fail_quiz_links(&self, fail: bool) {
        self.fail_quiz_links.store(fail, Ordering::SeqCst);
    }

    pub fn fail_user_links(&self, fail: bool) {
        self.fail_user_links.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl QuizRepository for InMemoryStore {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        Ok(self.quizzes.read().await.get(id).cloned())
    }
}

#[async_trait]
impl QuizResultRepository for InMemoryStore {
    async fn create(&self, result: QuizResult) -> AppResult<QuizResult> {
        let mut results = self.results.write().await;

        if results.contains_key(&result.id) {
            return Err(AppError::AlreadyExists(format!(
                "Result with id '{}' already exists",
                result.id
            )));
        }

        if result.exclusive {
            let conflict = results.values().any(|existing| {
                existing.exclusive
                    && existing.quiz_id == result.quiz_id
                    && existing.user_id == result.user_id
            });
            if conflict {
                return Err(AppError::AlreadyExists(format!(
                    "Exclusive result for quiz '{}' already exists",
                    result.quiz_id
                )));
            }
        }

        results.insert(result.id.clone(), result.clone());
        Ok(result)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizResult>> {
        Ok(self.results.read().await.get(id).cloned())
    }

    async fn find_by_user_and_quiz(
        &self,
        user_id: &str,
        quiz_id: &str,
    ) -> AppResult<Option<QuizResult>> {
        let results = self.results.read().await;
        Ok(results
            .values()
            .filter(|r| r.user_id.as_deref() == Some(user_id) && r.quiz_id == quiz_id)
            .max_by_key(|r| r.submitted_at)
            .cloned())
    }

    async fn find_submitted_since(&self, since: DateTime<Utc>) -> AppResult<Vec<QuizResult>> {
        let results = self.results.read().await;
        let mut items: Vec<_> = results
            .values()
            .filter(|r| r.submitted_at >= since)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.submitted_at.cmp(&b.submitted_at));
        Ok(items)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        if self.results.write().await.remove(id).is_none() {
            return Err(AppError::NotFound(format!(
                "Result with id '{}' not found",
                id
            )));
        }
        Ok(())
    }
}

fn add_to_set(set: &mut Vec<String>, id: &str) {
    if !set.iter().any(|existing| existing == id) {
        set.push(id.to_string());
    }
}

#[async_trait]
impl AggregateLinker for InMemoryStore {
    async fn add_result_to_quiz(&self, quiz_id: &str, result_id: &str) -> AppResult<()> {
        if self.fail_quiz_links.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError("quizzes unavailable".to_string()));
        }
        let mut quizzes = self.quizzes.write().await;
        let quiz = quizzes
            .get_mut(quiz_id)
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", quiz_id)))?;
        add_to_set(&mut quiz.result_ids, result_id);
        Ok(())
    }

    async fn add_result_to_user(&self, user_id: &str, result_id: &str) -> AppResult<()> {
        if self.fail_user_links.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError("users unavailable".to_string()));
        }
        let mut users = self.users.write().await;
        let user = users
            .get_mut(user_id)
            .ok_or_else(|| AppError::NotFound(format!("User with id '{}' not found", user_id)))?;
        add_to_set(&mut user.result_ids, result_id);
        Ok(())
    }

    async fn remove_result_from_quiz(&self, quiz_id: &str, result_id: &str) -> AppResult<()> {
        let mut quizzes = self.quizzes.write().await;
        let quiz = quizzes
            .get_mut(quiz_id)
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", quiz_id)))?;
        quiz.result_ids.retain(|id| id != result_id);
        Ok(())
    }

    async fn remove_result_from_user(&self, user_id: &str, result_id: &str) -> AppResult<()> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(user_id)
            .ok_or_else(|| AppError::NotFound(format!("User with id '{}' not found", user_id)))?;
        user.result_ids.retain(|id| id != result_id);
        Ok(())
    }
}

pub fn submission_service(
    store: &Arc<InMemoryStore>,
    strategy: DuplicateCheckStrategy,
) -> SubmissionService {
    let guard = DuplicateGuard::new(store.clone(), strategy);
    SubmissionService::new(store.clone(), store.clone(), store.clone(), guard)
}

pub fn quiz_result_service(store: &Arc<InMemoryStore>) -> QuizResultService {
    QuizResultService::new(store.clone(), store.clone())
}

/// Two questions with correct indices `[0, 1]`.
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

/// Stores a quiz and the users `alice` and `bob`; returns the quiz id.
pub async fn seed(store: &InMemoryStore, quiz: Quiz) -> String {
    let id = quiz.id.clone();
    store.insert_quiz(quiz).await;
    store.insert_user(User::new("alice", "alice")).await;
    store.insert_user(User::new("bob", "bob")).await;
    id
}
