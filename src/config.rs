use std::{env, str::FromStr};

use secrecy::SecretString;
use validator::Validate;

use crate::errors::{AppError, AppResult};

/// How `DuplicateGuard` looks for an existing result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DuplicateCheckStrategy {
    /// Resolve every result id recorded on the quiz.
    #[default]
    Scan,
    /// Query the results collection on `(user_id, quiz_id)`.
    Indexed,
}

impl FromStr for DuplicateCheckStrategy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scan" => Ok(DuplicateCheckStrategy::Scan),
            "indexed" => Ok(DuplicateCheckStrategy::Indexed),
            other => Err(AppError::ValidationError(format!(
                "unknown duplicate check strategy '{}'",
                other
            ))),
        }
    }
}

#[derive(Clone, Debug, Validate)]
pub struct Config {
    pub mongo_conn_string: SecretString,
    #[validate(length(min = 1))]
    pub mongo_db_name: String,
    #[validate(length(min = 1))]
    pub quizzes_collection: String,
    #[validate(length(min = 1))]
    pub users_collection: String,
    #[validate(length(min = 1))]
    pub results_collection: String,
    pub duplicate_check: DuplicateCheckStrategy,
    #[validate(range(min = 1, max = 525600))]
    pub reconcile_window_minutes: i64,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        let duplicate_check = match env::var("DUPLICATE_CHECK_STRATEGY") {
            Ok(value) => value.parse()?,
            Err(_) => DuplicateCheckStrategy::default(),
        };

        let reconcile_window_minutes = match env::var("RECONCILE_WINDOW_MINUTES") {
            Ok(value) => parse_window_minutes(&value)?,
            Err(_) => 60,
        };

        Ok(Self {
            mongo_conn_string: SecretString::from(
                env::var("MONGO_CONN_STRING")
                    .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            ),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "quizmark-local".to_string()),
            quizzes_collection: env::var("QUIZZES_COLLECTION")
                .unwrap_or_else(|_| "quizzes".to_string()),
            users_collection: env::var("USERS_COLLECTION").unwrap_or_else(|_| "users".to_string()),
            results_collection: env::var("RESULTS_COLLECTION")
                .unwrap_or_else(|_| "results".to_string()),
            duplicate_check,
            reconcile_window_minutes,
        })
    }

    pub fn validate_config(&self) -> AppResult<()> {
        self.validate()?;
        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: SecretString::from("mongodb://localhost:27017".to_string()),
            mongo_db_name: "quizmark-test".to_string(),
            quizzes_collection: "quizzes".to_string(),
            users_collection: "users".to_string(),
            results_collection: "results".to_string(),
            duplicate_check: DuplicateCheckStrategy::Scan,
            reconcile_window_minutes: 60,
        }
    }
}

fn parse_window_minutes(value: &str) -> AppResult<i64> {
    value.trim().parse().map_err(|_| {
        AppError::ValidationError(format!("invalid reconcile window minutes '{}'", value))
    })
}
