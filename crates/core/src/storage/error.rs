use thiserror::Error;

/// Errors that can occur while reading from a store.
///
/// Callers of the function never see these; every variant ends up as the same
/// generic 500 response. They exist so the log line says what went wrong.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Table not found: {table}")]
    TableNotFound { table: String },
    #[error("Throttled: {0}")]
    Throttled(String),
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Scan failed: {0}")]
    ScanFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Store not configured: {0}")]
    Configuration(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
