//! Application state with constructor-injected storage.
//!
//! The store is built once at startup and handed to the dispatcher; its
//! lifecycle is owned here, never by the dispatch code. The backend is
//! selected at compile time via feature flags.

use std::sync::Arc;

use taskpad_core::storage::TaskStore;

use crate::config::Config;
use crate::dispatch::Dispatcher;

/// Shared application state, cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    /// Request dispatcher holding the injected store.
    pub dispatcher: Dispatcher,
}

impl AppState {
    fn build(store: Arc<dyn TaskStore>) -> Self {
        Self {
            dispatcher: Dispatcher::new(store),
        }
    }
}

#[cfg(feature = "inmemory")]
mod inmemory_backend {
    use super::*;
    use crate::storage::InMemoryStore;

    impl AppState {
        /// Creates AppState backed by in-memory storage.
        /// Useful for testing without any external dependencies.
        pub async fn new(_config: &Config) -> Result<Self, anyhow::Error> {
            Ok(Self::build(Arc::new(InMemoryStore::new())))
        }
    }
}

#[cfg(feature = "dynamodb")]
mod dynamodb_backend {
    use super::*;
    use crate::storage::DynamoDbStore;

    impl AppState {
        /// Creates AppState backed by DynamoDB, using the AWS SDK default
        /// credential chain and the configured table name.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            let client = aws_sdk_dynamodb::Client::new(&aws_config);
            let store = DynamoDbStore::new(client, config.table_name.clone());

            Ok(Self::build(Arc::new(store)))
        }
    }
}
