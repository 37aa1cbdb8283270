use serde::{Deserialize, Serialize};

use crate::models::Task;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Column {
    pub id: String,
    pub title: String,
    pub tasks: Vec<Task>,
}

impl Column {
    pub fn new(id: &str, title: &str, tasks: Vec<Task>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            tasks,
        }
    }
}
