//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `StoreError` from `taskpad_core::storage`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;

use taskpad_core::storage::StoreError;

fn operation_failed(operation: &'static str, message: impl Into<String>) -> StoreError {
    StoreError::OperationFailed {
        operation,
        message: message.into(),
    }
}

/// Map a Scan SDK error to StoreError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(err: SdkError<ScanError, R>) -> StoreError {
    match err.into_service_error() {
        ScanError::ResourceNotFoundException(_) => operation_failed("Scan", "Table not found"),
        ScanError::ProvisionedThroughputExceededException(_) => {
            operation_failed("Scan", "Throughput exceeded, please retry")
        }
        ScanError::RequestLimitExceeded(_) => {
            operation_failed("Scan", "Request limit exceeded, please retry")
        }
        ScanError::InternalServerError(_) => {
            operation_failed("Scan", "DynamoDB internal server error")
        }
        err => operation_failed("Scan", format!("{:?}", err)),
    }
}

/// Map a PutItem SDK error to StoreError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> StoreError {
    match err.into_service_error() {
        PutItemError::ResourceNotFoundException(_) => operation_failed("PutItem", "Table not found"),
        PutItemError::ProvisionedThroughputExceededException(_) => {
            operation_failed("PutItem", "Throughput exceeded, please retry")
        }
        PutItemError::RequestLimitExceeded(_) => {
            operation_failed("PutItem", "Request limit exceeded, please retry")
        }
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            operation_failed("PutItem", "Item collection size limit exceeded")
        }
        PutItemError::TransactionConflictException(_) => {
            operation_failed("PutItem", "Transaction conflict, please retry")
        }
        PutItemError::InternalServerError(_) => {
            operation_failed("PutItem", "DynamoDB internal server error")
        }
        err => operation_failed("PutItem", format!("{:?}", err)),
    }
}

/// Map an UpdateItem SDK error to StoreError.
pub fn map_update_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<UpdateItemError, R>,
) -> StoreError {
    match err.into_service_error() {
        UpdateItemError::ResourceNotFoundException(_) => {
            operation_failed("UpdateItem", "Table not found")
        }
        UpdateItemError::ProvisionedThroughputExceededException(_) => {
            operation_failed("UpdateItem", "Throughput exceeded, please retry")
        }
        UpdateItemError::RequestLimitExceeded(_) => {
            operation_failed("UpdateItem", "Request limit exceeded, please retry")
        }
        UpdateItemError::ItemCollectionSizeLimitExceededException(_) => {
            operation_failed("UpdateItem", "Item collection size limit exceeded")
        }
        UpdateItemError::TransactionConflictException(_) => {
            operation_failed("UpdateItem", "Transaction conflict, please retry")
        }
        UpdateItemError::InternalServerError(_) => {
            operation_failed("UpdateItem", "DynamoDB internal server error")
        }
        err => operation_failed("UpdateItem", format!("{:?}", err)),
    }
}

/// Map a DeleteItem SDK error to StoreError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
) -> StoreError {
    match err.into_service_error() {
        DeleteItemError::ResourceNotFoundException(_) => {
            operation_failed("DeleteItem", "Table not found")
        }
        DeleteItemError::ProvisionedThroughputExceededException(_) => {
            operation_failed("DeleteItem", "Throughput exceeded, please retry")
        }
        DeleteItemError::RequestLimitExceeded(_) => {
            operation_failed("DeleteItem", "Request limit exceeded, please retry")
        }
        DeleteItemError::ItemCollectionSizeLimitExceededException(_) => {
            operation_failed("DeleteItem", "Item collection size limit exceeded")
        }
        DeleteItemError::TransactionConflictException(_) => {
            operation_failed("DeleteItem", "Transaction conflict, please retry")
        }
        DeleteItemError::InternalServerError(_) => {
            operation_failed("DeleteItem", "DynamoDB internal server error")
        }
        err => operation_failed("DeleteItem", format!("{:?}", err)),
    }
}
