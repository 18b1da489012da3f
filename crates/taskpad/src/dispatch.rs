//! Request dispatcher.
//!
//! Maps an inbound method to exactly one behavior and guarantees every path
//! returns a structured response; no fault escapes [`Dispatcher::dispatch`].
//! Validation happens eagerly and locally, before any store call.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use taskpad_core::storage::{StoreError, TaskStore, UpdateExpression};
use taskpad_core::task::{Task, ValidationError};

use crate::envelope::{ApiRequest, ApiResponse};
use crate::models::{CreateTask, DeleteTask, UpdateTask};

/// Error union for a single dispatch, converted to a response envelope at the
/// boundary.
#[derive(Debug, Error)]
enum DispatchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Body missing, unparseable, or a response failed to serialize.
    #[error("{0}")]
    Fault(String),
}

/// Dispatches request envelopes against an injected task store.
///
/// Holds no other state; each dispatch is an independent unit of work with at
/// most one store call.
#[derive(Clone)]
pub struct Dispatcher {
    store: Arc<dyn TaskStore>,
}

impl Dispatcher {
    /// Creates a dispatcher over the given store. Store lifecycle is owned by
    /// the caller.
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self { store }
    }

    /// Handles one request. Always returns a response envelope.
    pub async fn dispatch(&self, request: ApiRequest) -> ApiResponse {
        tracing::debug!(method = %request.method, "dispatching request");

        match self.try_dispatch(&request).await {
            Ok(response) => response,
            Err(DispatchError::Validation(err)) => {
                tracing::warn!(method = %request.method, error = %err, "rejected payload");
                ApiResponse::message(400, &err.to_string())
            }
            Err(err) => {
                tracing::error!(method = %request.method, error = %err, "request failed");
                ApiResponse::error(500, &err.to_string())
            }
        }
    }

    async fn try_dispatch(&self, request: &ApiRequest) -> Result<ApiResponse, DispatchError> {
        match request.method.as_str() {
            // Cross-origin preflight acknowledgement; no store access.
            "OPTIONS" => Ok(ApiResponse::json(200, &Value::String("CORS OK".into()))),
            "GET" => self.list().await,
            "POST" => self.create(decode(request)?).await,
            "PUT" => self.update(decode(request)?).await,
            "DELETE" => self.delete(decode(request)?).await,
            _ => Ok(ApiResponse::message(400, "Unsupported method")),
        }
    }

    /// GET: unbounded scan, serialized as a JSON array. Order is
    /// store-defined.
    async fn list(&self) -> Result<ApiResponse, DispatchError> {
        let items = self.store.scan().await?;
        let body = Value::Array(items.into_iter().map(Value::Object).collect());
        Ok(ApiResponse::json(200, &body))
    }

    /// POST: generate an id, default the status, persist the full record.
    async fn create(&self, payload: CreateTask) -> Result<ApiResponse, DispatchError> {
        let task = Task::new(payload.task);
        self.store.put(&task).await?;
        tracing::info!(id = %task.id, "created task");

        let body = serde_json::to_value(&task).map_err(|e| DispatchError::Fault(e.to_string()))?;
        Ok(ApiResponse::json(200, &body))
    }

    /// PUT: build the minimal mutation for the supplied fields and return
    /// only the post-mutation values of the changed attributes.
    async fn update(&self, payload: UpdateTask) -> Result<ApiResponse, DispatchError> {
        let (id, patch) = payload.into_parts()?;
        let expr = UpdateExpression::for_patch(&patch);
        let changed = self.store.update(&id, &expr).await?;
        tracing::info!(%id, "updated task");

        Ok(ApiResponse::json(200, &Value::Object(changed)))
    }

    /// DELETE: idempotent removal; deleting an absent id is still a success.
    async fn delete(&self, payload: DeleteTask) -> Result<ApiResponse, DispatchError> {
        self.store.delete(&payload.id).await?;
        tracing::info!(id = %payload.id, "deleted task");

        Ok(ApiResponse::message(200, "Item deleted"))
    }
}

/// Decodes the request body into a typed payload.
///
/// A missing or syntactically invalid body is a server fault (the transport
/// promised JSON for mutating methods); a well-formed object of the wrong
/// shape is a validation error.
fn decode<T: serde::de::DeserializeOwned>(request: &ApiRequest) -> Result<T, DispatchError> {
    let body = request
        .body
        .as_deref()
        .ok_or_else(|| DispatchError::Fault("Request body is missing".to_string()))?;

    let value: Value = serde_json::from_str(body)
        .map_err(|e| DispatchError::Fault(format!("Malformed request body: {e}")))?;

    serde_json::from_value(value)
        .map_err(|e| DispatchError::Validation(ValidationError::InvalidPayload(e.to_string())))
}

#[cfg(all(test, feature = "inmemory"))]
mod tests {
    use super::*;

    use async_trait::async_trait;

    use taskpad_core::storage::{Item, Result as StoreResult};

    use crate::storage::InMemoryStore;

    /// Store stub whose every call fails, for the server-fault path.
    struct FailingStore;

    #[async_trait]
    impl TaskStore for FailingStore {
        async fn scan(&self) -> StoreResult<Vec<Item>> {
            Err(StoreError::ConnectionFailed("endpoint unreachable".to_string()))
        }

        async fn put(&self, _task: &Task) -> StoreResult<()> {
            Err(StoreError::ConnectionFailed("endpoint unreachable".to_string()))
        }

        async fn update(&self, _id: &str, _expr: &UpdateExpression) -> StoreResult<Item> {
            Err(StoreError::ConnectionFailed("endpoint unreachable".to_string()))
        }

        async fn delete(&self, _id: &str) -> StoreResult<()> {
            Err(StoreError::ConnectionFailed("endpoint unreachable".to_string()))
        }
    }

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(Arc::new(InMemoryStore::new()))
    }

    fn request(method: &str, body: Option<&str>) -> ApiRequest {
        ApiRequest {
            method: method.to_string(),
            body: body.map(str::to_string),
        }
    }

    fn parse(body: &str) -> Value {
        serde_json::from_str(body).unwrap()
    }

    #[tokio::test]
    async fn options_returns_static_acknowledgement() {
        let response = dispatcher().dispatch(request("OPTIONS", None)).await;
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, r#""CORS OK""#);
    }

    #[tokio::test]
    async fn get_on_empty_table_returns_empty_array() {
        let response = dispatcher().dispatch(request("GET", None)).await;
        assert_eq!(response.status_code, 200);
        assert_eq!(parse(&response.body), serde_json::json!([]));
    }

    #[tokio::test]
    async fn create_returns_pending_task_with_fresh_id() {
        let dispatcher = dispatcher();
        let response = dispatcher
            .dispatch(request("POST", Some(r#"{"task": "buy milk"}"#)))
            .await;
        assert_eq!(response.status_code, 200);

        let body = parse(&response.body);
        assert_eq!(body["task"], "buy milk");
        assert_eq!(body["status"], "pending");
        assert!(!body["id"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn repeated_creates_get_unique_ids() {
        let dispatcher = dispatcher();
        let first = dispatcher
            .dispatch(request("POST", Some(r#"{"task": "a"}"#)))
            .await;
        let second = dispatcher
            .dispatch(request("POST", Some(r#"{"task": "b"}"#)))
            .await;
        assert_ne!(parse(&first.body)["id"], parse(&second.body)["id"]);
    }

    #[tokio::test]
    async fn create_without_task_field_is_rejected() {
        let response = dispatcher().dispatch(request("POST", Some("{}"))).await;
        assert_eq!(response.status_code, 400);
        let body = parse(&response.body);
        assert!(body["message"].as_str().unwrap().contains("task"));
    }

    #[tokio::test]
    async fn update_status_only_leaves_task_untouched() {
        let dispatcher = dispatcher();
        let created = dispatcher
            .dispatch(request("POST", Some(r#"{"task": "buy milk"}"#)))
            .await;
        let id = parse(&created.body)["id"].as_str().unwrap().to_string();

        let response = dispatcher
            .dispatch(request(
                "PUT",
                Some(&format!(r#"{{"id": "{id}", "status": "done"}}"#)),
            ))
            .await;
        assert_eq!(response.status_code, 200);
        // Only the changed attribute comes back.
        assert_eq!(parse(&response.body), serde_json::json!({"status": "done"}));

        let listed = dispatcher.dispatch(request("GET", None)).await;
        let items = parse(&listed.body);
        assert_eq!(items[0]["task"], "buy milk");
        assert_eq!(items[0]["status"], "done");
    }

    #[tokio::test]
    async fn update_with_no_fields_is_rejected_before_the_store() {
        let dispatcher = dispatcher();
        let created = dispatcher
            .dispatch(request("POST", Some(r#"{"task": "keep me"}"#)))
            .await;
        let id = parse(&created.body)["id"].as_str().unwrap().to_string();

        let response = dispatcher
            .dispatch(request("PUT", Some(&format!(r#"{{"id": "{id}"}}"#))))
            .await;
        assert_eq!(response.status_code, 400);
        assert_eq!(response.body, r#"{"message":"No fields"}"#);

        // Nothing was mutated.
        let listed = dispatcher.dispatch(request("GET", None)).await;
        let items = parse(&listed.body);
        assert_eq!(items[0]["task"], "keep me");
        assert_eq!(items[0]["status"], "pending");
    }

    #[tokio::test]
    async fn update_without_id_is_rejected() {
        let response = dispatcher()
            .dispatch(request("PUT", Some(r#"{"status": "done"}"#)))
            .await;
        assert_eq!(response.status_code, 400);
        let body = parse(&response.body);
        assert!(body["message"].as_str().unwrap().contains("id"));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let dispatcher = dispatcher();
        let body = r#"{"id": "nonexistent"}"#;

        let first = dispatcher.dispatch(request("DELETE", Some(body))).await;
        let second = dispatcher.dispatch(request("DELETE", Some(body))).await;

        for response in [first, second] {
            assert_eq!(response.status_code, 200);
            assert_eq!(response.body, r#"{"message":"Item deleted"}"#);
        }
    }

    #[tokio::test]
    async fn unknown_method_is_a_client_error() {
        let response = dispatcher().dispatch(request("PATCH", None)).await;
        assert_eq!(response.status_code, 400);
        assert_eq!(response.body, r#"{"message":"Unsupported method"}"#);
    }

    #[tokio::test]
    async fn method_match_is_case_sensitive() {
        let response = dispatcher().dispatch(request("get", None)).await;
        assert_eq!(response.status_code, 400);
        assert_eq!(response.body, r#"{"message":"Unsupported method"}"#);
    }

    #[tokio::test]
    async fn store_fault_becomes_a_server_error() {
        let dispatcher = Dispatcher::new(Arc::new(FailingStore));
        let response = dispatcher.dispatch(request("GET", None)).await;
        assert_eq!(response.status_code, 500);

        let body = parse(&response.body);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("endpoint unreachable"));
    }

    #[tokio::test]
    async fn malformed_body_is_a_server_fault() {
        let response = dispatcher()
            .dispatch(request("POST", Some("not json")))
            .await;
        assert_eq!(response.status_code, 500);
        assert!(parse(&response.body)["error"].is_string());
    }

    #[tokio::test]
    async fn missing_body_on_mutating_method_is_a_server_fault() {
        let response = dispatcher().dispatch(request("DELETE", None)).await;
        assert_eq!(response.status_code, 500);
    }
}
