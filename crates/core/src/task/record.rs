use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status label assigned to newly created tasks.
pub const DEFAULT_STATUS: &str = "pending";

/// A single task record.
///
/// The `id` is assigned once at creation and never rewritten; updates address
/// records by id but only ever touch `task` and `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque unique identifier and primary key.
    pub id: String,
    /// Free-text description.
    pub task: String,
    /// Free-text state label. Not validated against an enumerated set.
    pub status: String,
}

impl Task {
    /// Creates a new task with a fresh v4 UUID id and the default status.
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            task: task.into(),
            status: DEFAULT_STATUS.to_string(),
        }
    }
}
