//! Task Model

use serde::{Deserialize, Serialize};
use shared::util::millis_to_datetime;
use shared::{Task, TaskChanges, TaskDraft, TaskPriority};
use surrealdb::RecordId;

use super::optional_record_key;

/// Stored task (timestamps in epoch millis)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub title: String,
    #[serde(default)]
    pub priority: TaskPriority,
    pub due: i64,
    #[serde(default)]
    pub completed: bool,
    pub created_at: i64,
}

impl TaskRecord {
    pub fn new(draft: TaskDraft, created_at: i64) -> Self {
        Self {
            id: None,
            title: draft.title,
            priority: draft.priority,
            due: draft.due.timestamp_millis(),
            completed: false,
            created_at,
        }
    }
}

impl From<TaskRecord> for Task {
    fn from(record: TaskRecord) -> Self {
        Task {
            id: optional_record_key(record.id.as_ref()),
            title: record.title,
            priority: record.priority,
            due: millis_to_datetime(record.due),
            completed: record.completed,
            created_at: millis_to_datetime(record.created_at),
        }
    }
}

/// MERGE payload: only provided fields are written
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl From<TaskChanges> for TaskPatch {
    fn from(changes: TaskChanges) -> Self {
        Self {
            title: changes.title,
            priority: changes.priority,
            due: changes.due.map(|d| d.timestamp_millis()),
            completed: changes.completed,
        }
    }
}
