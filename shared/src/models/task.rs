//! Task Model

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task priority
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    High,
    #[default]
    Medium,
    Low,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::High => "high",
            TaskPriority::Medium => "medium",
            TaskPriority::Low => "low",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priority string outside `high | medium | low`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("priority must be one of high, medium, low (got '{0}')")]
pub struct UnknownPriority(pub String);

impl FromStr for TaskPriority {
    type Err = UnknownPriority;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "high" => Ok(TaskPriority::High),
            "medium" => Ok(TaskPriority::Medium),
            "low" => Ok(TaskPriority::Low),
            other => Err(UnknownPriority(other.to_string())),
        }
    }
}

/// Task entity as served by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub priority: TaskPriority,
    pub due: DateTime<Utc>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// POST /api/tasks body
///
/// Every field is optional on the wire so that missing values surface as a
/// 400 with a readable message rather than a JSON rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskCreate {
    pub title: Option<String>,
    pub priority: Option<String>,
    pub due: Option<String>,
}

/// PUT /api/tasks/:id body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub priority: Option<String>,
    pub due: Option<String>,
    pub completed: Option<bool>,
}

/// Boundary-checked task creation
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub priority: TaskPriority,
    pub due: DateTime<Utc>,
}

/// Boundary-checked partial task update (absent = keep current)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub priority: Option<TaskPriority>,
    pub due: Option<DateTime<Utc>>,
    pub completed: Option<bool>,
}

impl TaskChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.priority.is_none()
            && self.due.is_none()
            && self.completed.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_parses_known_values() {
        assert_eq!("high".parse::<TaskPriority>(), Ok(TaskPriority::High));
        assert_eq!(" low ".parse::<TaskPriority>(), Ok(TaskPriority::Low));
        assert_eq!(
            "urgent".parse::<TaskPriority>(),
            Err(UnknownPriority("urgent".into()))
        );
    }

    #[test]
    fn priority_is_case_sensitive_like_the_wire_format() {
        assert!("High".parse::<TaskPriority>().is_err());
    }

    #[test]
    fn priority_serializes_lowercase() {
        let json = serde_json::to_string(&TaskPriority::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
        assert_eq!(TaskPriority::default(), TaskPriority::Medium);
    }
}
