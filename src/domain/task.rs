use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a task
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(String);

impl TaskId {
    /// Creates a new random TaskId
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
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
        write!(f, "{}", self.0)
    }
}

/// Progress column a task belongs to
///
/// Serialized as its integer value (0, 1, 2). The derived ordering follows
/// the column layout left to right, which the drag reconciliation relies on
/// when converting column-relative indices to sequence positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Progress {
    NoProgress,
    InProgress,
    Complete,
}

impl Progress {
    /// All columns in display order
    pub const ALL: [Progress; 3] = [Progress::NoProgress, Progress::InProgress, Progress::Complete];
}

impl From<Progress> for u8 {
    fn from(p: Progress) -> Self {
        match p {
            Progress::NoProgress => 0,
            Progress::InProgress => 1,
            Progress::Complete => 2,
        }
    }
}

impl TryFrom<u8> for Progress {
    type Error = crate::error::TavolaError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Progress::NoProgress),
            1 => Ok(Progress::InProgress),
            2 => Ok(Progress::Complete),
            other => Err(crate::error::TavolaError::InvalidProgress(other)),
        }
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoProgress => write!(f, "No Progress"),
            Self::InProgress => write!(f, "In Progress"),
            Self::Complete => write!(f, "Complete"),
        }
    }
}

/// A task card on the board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub progress: Progress,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task with the given ID and name, starting in No Progress
    pub fn new(id: TaskId, name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            progress: Progress::NoProgress,
            description: None,
            points: None,
            color: None,
            due_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the starting column
    pub fn with_progress(mut self, progress: Progress) -> Self {
        self.progress = progress;
        self
    }

    /// Sets the name
    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    /// Sets the description
    pub fn set_description(&mut self, description: String) {
        self.description = Some(description);
        self.updated_at = Utc::now();
    }

    /// Moves the task to a column
    pub fn set_progress(&mut self, progress: Progress) {
        self.progress = progress;
        self.updated_at = Utc::now();
    }

    /// Sets the due date
    pub fn set_due_date(&mut self, date: DateTime<Utc>) {
        self.due_date = Some(date);
        self.updated_at = Utc::now();
    }

    /// Clears the due date
    pub fn clear_due_date(&mut self) {
        self.due_date = None;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_id_uniqueness() {
        let a = TaskId::new();
        let b = TaskId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_task_id_from_str() {
        let id = TaskId::from("abc123");
        assert_eq!(id.as_str(), "abc123");
        assert_eq!(id.to_string(), "abc123");
    }

    #[test]
    fn test_progress_round_trip() {
        assert_eq!(Progress::try_from(0).unwrap(), Progress::NoProgress);
        assert_eq!(Progress::try_from(1).unwrap(), Progress::InProgress);
        assert_eq!(Progress::try_from(2).unwrap(), Progress::Complete);
        assert_eq!(u8::from(Progress::Complete), 2);

        assert!(Progress::try_from(3).is_err());
        assert!(Progress::try_from(255).is_err());
    }

    #[test]
    fn test_progress_ordering() {
        assert!(Progress::NoProgress < Progress::InProgress);
        assert!(Progress::InProgress < Progress::Complete);
    }

    #[test]
    fn test_progress_serializes_as_integer() {
        let json = serde_json::to_string(&Progress::InProgress).unwrap();
        assert_eq!(json, "1");

        let back: Progress = serde_json::from_str("2").unwrap();
        assert_eq!(back, Progress::Complete);

        let bad: Result<Progress, _> = serde_json::from_str("7");
        assert!(bad.is_err());
    }

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new(TaskId::from("t1"), "Write docs".to_string());
        assert_eq!(task.progress, Progress::NoProgress);
        assert!(task.description.is_none());
        assert!(task.due_date.is_none());
        assert_eq!(task.created_at, task.updated_at);
    }

    #[test]
    fn test_set_progress_updates_updated_at() {
        let mut task = Task::new(TaskId::from("t1"), "Test".to_string());
        let initial_updated_at = task.updated_at;

        std::thread::sleep(std::time::Duration::from_millis(10));
        task.set_progress(Progress::Complete);

        assert_eq!(task.progress, Progress::Complete);
        assert!(task.updated_at > initial_updated_at);
    }

    #[test]
    fn test_task_serialization_skips_empty_fields() {
        let task = Task::new(TaskId::from("t1"), "Test".to_string());
        let json = serde_json::to_string(&task).unwrap();

        assert!(!json.contains("description"));
        assert!(!json.contains("due_date"));
        assert!(!json.contains("points"));
    }

    #[test]
    fn test_task_deserialization_without_optional_fields() {
        let json = r#"{
            "id": "t1",
            "name": "Old Task",
            "progress": 1,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id.as_str(), "t1");
        assert_eq!(task.progress, Progress::InProgress);
        assert!(task.points.is_none());
    }
}
