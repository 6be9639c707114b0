use async_trait::async_trait;

use videos_core::storage::{Result, StoreError, VideoStore};
use videos_core::ResultSet;

use crate::config::ConfigError;

/// Stand-in store used when configuration could not be loaded.
///
/// Every scan fails with [`StoreError::Configuration`], so requests still get
/// the regular 500 response instead of the process exiting at startup.
#[derive(Debug, Clone)]
pub struct MisconfiguredStore {
    reason: String,
}

impl MisconfiguredStore {
    pub fn new(error: &ConfigError) -> Self {
        Self {
            reason: error.to_string(),
        }
    }
}

#[async_trait]
impl VideoStore for MisconfiguredStore {
    async fn scan_all(&self, _table_name: &str) -> Result<ResultSet> {
        Err(StoreError::Configuration(self.reason.clone()))
    }
}
