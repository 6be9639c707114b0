use async_trait::async_trait;

use crate::video::ResultSet;

use super::Result;

/// Read access to a table of opaque items.
///
/// This is the only capability the function needs from its store; there is
/// no write method.
#[async_trait]
pub trait VideoStore: Send + Sync {
    /// Reads every item of `table_name` in a single scan.
    async fn scan_all(&self, table_name: &str) -> Result<ResultSet>;
}
