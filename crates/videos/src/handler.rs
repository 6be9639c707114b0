//! The function's single operation.

use std::sync::Arc;

use videos_core::storage::VideoStore;
use videos_core::ApiResponse;

/// Lists every item of the videos table.
///
/// Holds the store capability and the table name; both are fixed at
/// construction and shared read-only between concurrent invocations.
#[derive(Clone)]
pub struct VideoListHandler {
    store: Arc<dyn VideoStore>,
    table_name: String,
}

impl VideoListHandler {
    pub fn new(store: Arc<dyn VideoStore>, table_name: impl Into<String>) -> Self {
        Self {
            store,
            table_name: table_name.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Scans the table and returns the items as a JSON array.
    ///
    /// Always produces a response: 200 with the items in scan order, or the
    /// generic 500 when anything fails. The failure is logged here and never
    /// reaches the caller.
    pub async fn list_videos(&self) -> ApiResponse {
        let items = match self.store.scan_all(&self.table_name).await {
            Ok(items) => items,
            Err(error) => {
                tracing::error!(%error, table = %self.table_name, "Failed to scan videos table");
                return ApiResponse::internal_server_error();
            }
        };

        ApiResponse::ok_json(&items).unwrap_or_else(|error| {
            tracing::error!(%error, table = %self.table_name, "Failed to serialize videos");
            ApiResponse::internal_server_error()
        })
    }
}
