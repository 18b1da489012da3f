//! Typed request payloads decoded at the dispatch boundary.
//!
//! The dispatcher never works with untyped JSON: each mutating method decodes
//! its body into one of these shapes, or fails validation before any store
//! access.

use serde::Deserialize;

use taskpad_core::task::{TaskPatch, ValidationError};

/// Payload for POST (create).
#[derive(Debug, Deserialize)]
pub struct CreateTask {
    pub task: String,
}

/// Payload for PUT (partial update).
///
/// `id` is required; the mutable fields are each optional but at least one
/// must be present, enforced by [`UpdateTask::into_parts`].
#[derive(Debug, Deserialize)]
pub struct UpdateTask {
    pub id: String,
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl UpdateTask {
    /// Splits the payload into its key and a validated patch.
    pub fn into_parts(self) -> Result<(String, TaskPatch), ValidationError> {
        let patch = TaskPatch::new(self.task, self.status)?;
        Ok((self.id, patch))
    }
}

/// Payload for DELETE.
#[derive(Debug, Deserialize)]
pub struct DeleteTask {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_task_field() {
        let result: Result<CreateTask, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }

    #[test]
    fn update_with_id_only_fails_validation() {
        let payload: UpdateTask = serde_json::from_str(r#"{"id": "abc"}"#).unwrap();
        assert_eq!(payload.into_parts(), Err(ValidationError::NoFields));
    }

    #[test]
    fn update_with_status_only_is_valid() {
        let payload: UpdateTask = serde_json::from_str(r#"{"id": "abc", "status": "done"}"#).unwrap();
        let (id, patch) = payload.into_parts().unwrap();
        assert_eq!(id, "abc");
        assert_eq!(patch.status(), Some("done"));
        assert_eq!(patch.task(), None);
    }

    #[test]
    fn update_never_rewrites_id() {
        // The id only ever addresses the record; it is not a mutable field.
        let payload: UpdateTask =
            serde_json::from_str(r#"{"id": "abc", "task": "x", "status": "y"}"#).unwrap();
        let (_, patch) = payload.into_parts().unwrap();
        assert_eq!(patch.task(), Some("x"));
        assert_eq!(patch.status(), Some("y"));
    }
}
