use thiserror::Error;

/// Errors produced while validating a caller-supplied payload.
///
/// These are raised before any store interaction and surface as client
/// errors, never as server faults.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// An update payload supplied neither `task` nor `status`.
    #[error("No fields")]
    NoFields,
    /// The payload was a JSON object but did not match the expected shape.
    #[error("{0}")]
    InvalidPayload(String),
}

/// A validated partial update against a single task record.
///
/// A `TaskPatch` always carries at least one field: the zero-field payload is
/// rejected by [`TaskPatch::new`], so downstream code never has to re-check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPatch {
    task: Option<String>,
    status: Option<String>,
}

impl TaskPatch {
    /// Validates a partial payload into a patch.
    ///
    /// Returns [`ValidationError::NoFields`] when both fields are absent.
    pub fn new(task: Option<String>, status: Option<String>) -> Result<Self, ValidationError> {
        if task.is_none() && status.is_none() {
            return Err(ValidationError::NoFields);
        }
        Ok(Self { task, status })
    }

    /// New description, when supplied.
    pub fn task(&self) -> Option<&str> {
        self.task.as_deref()
    }

    /// New status label, when supplied.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}
