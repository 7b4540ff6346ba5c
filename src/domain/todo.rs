use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier assigned by the collection: monotonic from 1, never reused,
/// even after deletion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct TodoId(pub i64);

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    /// Lower value = higher precedence. Any integer, duplicates allowed.
    pub priority: i64,
    pub created_at: DateTime<Utc>,
    pub completed: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    pub priority: i64,
}
