use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(content: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content,
            created_at: Utc::now(),
        }
    }

    // Seed tasks carry fixed ids so every fresh session starts from the
    // same board layout.
    pub fn seeded(id: &str, content: &str) -> Self {
        Self {
            id: id.to_string(),
            content: content.to_string(),
            created_at: Utc::now(),
        }
    }
}
