use async_trait::async_trait;

use crate::task::Task;

use super::{Result, UpdateExpression};

/// A stored item rendered as a JSON object.
///
/// Backends convert their native attribute representation into this shape,
/// coercing native numeric attributes into standard JSON numbers so the item
/// is directly serializable.
pub type Item = serde_json::Map<String, serde_json::Value>;

/// Durable storage of task records keyed by their opaque `id`.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Returns every item in the table. Order is store-defined.
    async fn scan(&self) -> Result<Vec<Item>>;

    /// Persists a full record, overwriting any item with the same id.
    async fn put(&self, task: &Task) -> Result<()>;

    /// Applies a partial update to the record with the given id and returns
    /// only the newly set attribute values.
    ///
    /// Updating an id with no existing record creates a stub item holding
    /// the key plus the set attributes, matching DynamoDB upsert semantics.
    async fn update(&self, id: &str, expr: &UpdateExpression) -> Result<Item>;

    /// Removes the record with the given id. Deleting an absent id succeeds.
    async fn delete(&self, id: &str) -> Result<()>;
}
