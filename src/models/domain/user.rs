use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The slice of a user document this service touches: its result set.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub result_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(id: &str, username: &str) -> Self {
        User {
            id: id.to_string(),
            username: username.to_string(),
            result_ids: Vec::new(),
            created_at: Some(Utc::now()),
        }
    }
}
