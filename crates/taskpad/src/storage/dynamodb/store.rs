use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;

use taskpad_core::storage::{Item, Result, TaskStore, UpdateExpression};
use taskpad_core::task::Task;

use super::conversions::{item_to_json, task_to_item};
use super::error::{
    map_delete_item_error, map_put_item_error, map_scan_error, map_update_item_error,
};

/// DynamoDB-based task store.
///
/// One SDK call per operation; consistency of concurrent updates to the same
/// record is delegated to DynamoDB's single-call atomicity.
pub struct DynamoDbStore {
    client: Client,
    table_name: String,
}

impl DynamoDbStore {
    /// Creates a new store with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl TaskStore for DynamoDbStore {
    async fn scan(&self) -> Result<Vec<Item>> {
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(map_scan_error)?;

        let items = result.items.unwrap_or_default();
        items.iter().map(item_to_json).collect()
    }

    async fn put(&self, task: &Task) -> Result<()> {
        let item = task_to_item(task);

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn update(&self, id: &str, expr: &UpdateExpression) -> Result<Item> {
        let mut request = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .update_expression(expr.expression())
            .return_values(ReturnValue::UpdatedNew);

        for (placeholder, value) in expr.values() {
            request = request
                .expression_attribute_values(placeholder.as_str(), AttributeValue::S(value.clone()));
        }
        if !expr.names().is_empty() {
            request = request.set_expression_attribute_names(Some(expr.names().clone()));
        }

        let result = request.send().await.map_err(map_update_item_error)?;

        item_to_json(&result.attributes.unwrap_or_default())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }
}
