//! In-memory store implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use taskpad_core::storage::{Item, Result, StoreError, TaskStore, UpdateExpression};
use taskpad_core::task::Task;

/// In-memory storage backend for tests and local runs.
///
/// Items live in a HashMap behind `Arc<RwLock<_>>`; nothing is persisted.
/// Update semantics mirror the DynamoDB backend, including the upsert of a
/// stub item when the id does not exist.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    items: Arc<RwLock<HashMap<String, Item>>>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for InMemoryStore {
    async fn scan(&self) -> Result<Vec<Item>> {
        let items = self.items.read().await;
        Ok(items.values().cloned().collect())
    }

    async fn put(&self, task: &Task) -> Result<()> {
        let value =
            serde_json::to_value(task).map_err(|e| StoreError::InvalidData(e.to_string()))?;
        let Value::Object(item) = value else {
            return Err(StoreError::InvalidData(
                "task did not serialize to an object".to_string(),
            ));
        };

        let mut items = self.items.write().await;
        items.insert(task.id.clone(), item);
        Ok(())
    }

    async fn update(&self, id: &str, expr: &UpdateExpression) -> Result<Item> {
        let mut items = self.items.write().await;
        let item = items.entry(id.to_string()).or_insert_with(|| {
            let mut stub = Item::new();
            stub.insert("id".to_string(), Value::String(id.to_string()));
            stub
        });
        Ok(expr.apply(item))
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut items = self.items.write().await;
        items.remove(id);
        Ok(())
    }
}
