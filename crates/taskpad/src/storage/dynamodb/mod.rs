//! DynamoDB storage backend implementation.
//!
//! Implements `taskpad_core::storage::TaskStore` against a single table
//! keyed by `id`, using `aws-sdk-dynamodb`.

mod conversions;
mod error;
mod store;

pub use store::DynamoDbStore;
