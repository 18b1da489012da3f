//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! JSON items. The store's native numeric type (`N`, a decimal string) is not
//! directly serializable, so it is coerced into a standard JSON number here.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Number, Value};

use taskpad_core::storage::{Item, StoreError};
use taskpad_core::task::Task;

/// Convert a Task to a DynamoDB item.
pub fn task_to_item(task: &Task) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();
    item.insert("id".to_string(), AttributeValue::S(task.id.clone()));
    item.insert("task".to_string(), AttributeValue::S(task.task.clone()));
    item.insert("status".to_string(), AttributeValue::S(task.status.clone()));
    item
}

/// Convert a DynamoDB item to a JSON object.
pub fn item_to_json(item: &HashMap<String, AttributeValue>) -> Result<Item, StoreError> {
    item.iter()
        .map(|(key, value)| Ok((key.clone(), attribute_to_json(value)?)))
        .collect()
}

/// Convert a single attribute value, coercing `N` to a JSON number.
fn attribute_to_json(value: &AttributeValue) -> Result<Value, StoreError> {
    match value {
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::N(n) => number_to_json(n),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::L(list) => list
            .iter()
            .map(attribute_to_json)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::M(map) => Ok(Value::Object(item_to_json(map)?)),
        AttributeValue::Ss(set) => Ok(Value::Array(
            set.iter().cloned().map(Value::String).collect(),
        )),
        AttributeValue::Ns(set) => set
            .iter()
            .map(|n| number_to_json(n))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        other => Err(StoreError::InvalidData(format!(
            "Unsupported attribute type: {:?}",
            other
        ))),
    }
}

/// Parse the store's decimal string into a JSON number.
///
/// Integer values keep an integral representation; everything else goes
/// through f64.
fn number_to_json(n: &str) -> Result<Value, StoreError> {
    if let Ok(integer) = n.parse::<i64>() {
        return Ok(Value::Number(Number::from(integer)));
    }
    if let Ok(integer) = n.parse::<u64>() {
        return Ok(Value::Number(Number::from(integer)));
    }

    let float: f64 = n
        .parse()
        .map_err(|_| StoreError::InvalidData(format!("Invalid numeric attribute: {n}")))?;
    Number::from_f64(float)
        .map(Value::Number)
        .ok_or_else(|| StoreError::InvalidData(format!("Non-finite numeric attribute: {n}")))
}
