//! Task Entity
//!
//! A single to-do entry. Serialized with camelCase keys and ISO-8601 timestamps,
//! which is the layout of the persisted cookie value.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque task identifier, unique within a collection
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TaskId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A to-do entry
///
/// `priority` only orders active tasks; completed tasks are ordered by
/// `completed_at`. `completed_at` is set exactly when `completed` is true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub priority: i64,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Create a new active task
    pub fn new(title: String, description: String, priority: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            id: TaskId::generate(),
            title,
            description,
            priority,
            completed: false,
            created_at,
            completed_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.completed
    }

    /// Flip completion, stamping or clearing `completed_at`
    pub(crate) fn toggle_at(&mut self, now: DateTime<Utc>) {
        self.completed = !self.completed;
        self.completed_at = if self.completed { Some(now) } else { None };
    }
}
