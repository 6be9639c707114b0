//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `StoreError` from `videos_core::storage`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::scan::ScanError;
use videos_core::storage::StoreError;

/// Map a Scan SDK error to StoreError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ScanError, R>,
    table_name: &str,
) -> StoreError {
    if matches!(
        err,
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_)
    ) {
        return StoreError::ConnectionFailed(DisplayErrorContext(&err).to_string());
    }

    match err.into_service_error() {
        ScanError::ResourceNotFoundException(_) => StoreError::TableNotFound {
            table: table_name.to_string(),
        },
        ScanError::ProvisionedThroughputExceededException(_) => {
            StoreError::Throttled("Throughput exceeded".to_string())
        }
        ScanError::RequestLimitExceeded(_) => {
            StoreError::Throttled("Request limit exceeded".to_string())
        }
        ScanError::InternalServerError(_) => {
            StoreError::ScanFailed("DynamoDB internal server error".to_string())
        }
        err => StoreError::ScanFailed(format!("Scan failed: {:?}", err)),
    }
}
