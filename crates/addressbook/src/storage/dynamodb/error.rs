//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `addressbook_core::storage`.
//! Conditional check failures are matched on the error variant, never on the
//! message text. Requests that never reached the table map to
//! `ConnectionFailed`.

use std::fmt::Debug;

use addressbook_core::storage::RepositoryError;
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;

const TABLE_NOT_FOUND: &str = "Table not found";
const THROUGHPUT_EXCEEDED: &str = "Throughput exceeded, please retry";
const REQUEST_LIMIT_EXCEEDED: &str = "Request limit exceeded, please retry";
const INTERNAL_SERVER_ERROR: &str = "DynamoDB internal server error";
const ITEM_COLLECTION_LIMIT: &str = "Item collection size limit exceeded";
const TRANSACTION_CONFLICT: &str = "Transaction conflict, please retry";
const DISPATCH_FAILED: &str = "Could not reach DynamoDB";
const REQUEST_TIMED_OUT: &str = "DynamoDB request timed out";

fn query_failed(message: &str) -> RepositoryError {
    RepositoryError::QueryFailed(message.to_string())
}

/// Returns `ConnectionFailed` for transport failures, `None` for anything
/// the service answered.
fn connection_failure<E, R>(err: &SdkError<E, R>) -> Option<RepositoryError> {
    let message = match err {
        SdkError::DispatchFailure(_) => DISPATCH_FAILED,
        SdkError::TimeoutError(_) => REQUEST_TIMED_OUT,
        _ => return None,
    };
    Some(RepositoryError::ConnectionFailed(message.to_string()))
}

/// Map a GetItem SDK error to RepositoryError.
///
/// A missing item is not an error for GetItem; `ResourceNotFoundException`
/// means the table itself is missing.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> RepositoryError {
    if let Some(failure) = connection_failure(&err) {
        return failure;
    }

    match err.into_service_error() {
        GetItemError::ResourceNotFoundException(_) => query_failed(TABLE_NOT_FOUND),
        GetItemError::ProvisionedThroughputExceededException(_) => {
            query_failed(THROUGHPUT_EXCEEDED)
        }
        GetItemError::RequestLimitExceeded(_) => query_failed(REQUEST_LIMIT_EXCEEDED),
        GetItemError::InternalServerError(_) => query_failed(INTERNAL_SERVER_ERROR),
        err => RepositoryError::QueryFailed(format!("GetItem failed: {:?}", err)),
    }
}

/// Map a Scan SDK error to RepositoryError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ScanError, R>,
) -> RepositoryError {
    if let Some(failure) = connection_failure(&err) {
        return failure;
    }

    match err.into_service_error() {
        ScanError::ResourceNotFoundException(_) => query_failed(TABLE_NOT_FOUND),
        ScanError::ProvisionedThroughputExceededException(_) => query_failed(THROUGHPUT_EXCEEDED),
        ScanError::RequestLimitExceeded(_) => query_failed(REQUEST_LIMIT_EXCEEDED),
        ScanError::InternalServerError(_) => query_failed(INTERNAL_SERVER_ERROR),
        err => RepositoryError::QueryFailed(format!("Scan failed: {:?}", err)),
    }
}

/// Map a PutItem SDK error to RepositoryError.
///
/// Puts are issued with `attribute_not_exists(phone)`, so a failed condition
/// means the phone is already taken.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
    phone: &str,
) -> RepositoryError {
    if let Some(failure) = connection_failure(&err) {
        return failure;
    }

    match err.into_service_error() {
        PutItemError::ConditionalCheckFailedException(_) => {
            RepositoryError::contact_exists(phone)
        }
        PutItemError::ResourceNotFoundException(_) => query_failed(TABLE_NOT_FOUND),
        PutItemError::ProvisionedThroughputExceededException(_) => {
            query_failed(THROUGHPUT_EXCEEDED)
        }
        PutItemError::RequestLimitExceeded(_) => query_failed(REQUEST_LIMIT_EXCEEDED),
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            query_failed(ITEM_COLLECTION_LIMIT)
        }
        PutItemError::TransactionConflictException(_) => query_failed(TRANSACTION_CONFLICT),
        PutItemError::InternalServerError(_) => query_failed(INTERNAL_SERVER_ERROR),
        err => RepositoryError::QueryFailed(format!("PutItem failed: {:?}", err)),
    }
}

/// Map an UpdateItem SDK error to RepositoryError.
///
/// Updates are issued with `attribute_exists(phone)`, so a failed condition
/// means there is no contact to update.
pub fn map_update_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<UpdateItemError, R>,
    phone: &str,
) -> RepositoryError {
    if let Some(failure) = connection_failure(&err) {
        return failure;
    }

    match err.into_service_error() {
        UpdateItemError::ConditionalCheckFailedException(_) => {
            RepositoryError::contact_not_found(phone)
        }
        UpdateItemError::ResourceNotFoundException(_) => query_failed(TABLE_NOT_FOUND),
        UpdateItemError::ProvisionedThroughputExceededException(_) => {
            query_failed(THROUGHPUT_EXCEEDED)
        }
        UpdateItemError::RequestLimitExceeded(_) => query_failed(REQUEST_LIMIT_EXCEEDED),
        UpdateItemError::ItemCollectionSizeLimitExceededException(_) => {
            query_failed(ITEM_COLLECTION_LIMIT)
        }
        UpdateItemError::TransactionConflictException(_) => query_failed(TRANSACTION_CONFLICT),
        UpdateItemError::InternalServerError(_) => query_failed(INTERNAL_SERVER_ERROR),
        err => RepositoryError::QueryFailed(format!("UpdateItem failed: {:?}", err)),
    }
}

/// Map a DeleteItem SDK error to RepositoryError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
    phone: &str,
) -> RepositoryError {
    if let Some(failure) = connection_failure(&err) {
        return failure;
    }

    match err.into_service_error() {
        DeleteItemError::ConditionalCheckFailedException(_) => {
            RepositoryError::contact_not_found(phone)
        }
        DeleteItemError::ResourceNotFoundException(_) => query_failed(TABLE_NOT_FOUND),
        DeleteItemError::ProvisionedThroughputExceededException(_) => {
            query_failed(THROUGHPUT_EXCEEDED)
        }
        DeleteItemError::RequestLimitExceeded(_) => query_failed(REQUEST_LIMIT_EXCEEDED),
        DeleteItemError::ItemCollectionSizeLimitExceededException(_) => {
            query_failed(ITEM_COLLECTION_LIMIT)
        }
        DeleteItemError::TransactionConflictException(_) => query_failed(TRANSACTION_CONFLICT),
        DeleteItemError::InternalServerError(_) => query_failed(INTERNAL_SERVER_ERROR),
        err => RepositoryError::QueryFailed(format!("DeleteItem failed: {:?}", err)),
    }
}
