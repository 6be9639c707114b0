//! DynamoDB store implementation.
//!
//! Implements `VideoStore` from `videos_core::storage` with a single `Scan`.

use async_trait::async_trait;
use aws_sdk_dynamodb::config::Credentials;
use aws_sdk_dynamodb::Client;

use videos_core::storage::{Result, VideoStore};
use videos_core::ResultSet;

use crate::config::StoreConfig;

use super::conversions::item_from_attributes;
use super::error::map_scan_error;

/// Name the static credentials are reported under in SDK logs.
const CREDENTIALS_PROVIDER_NAME: &str = "VideosStoreConfig";

/// DynamoDB-backed store.
#[derive(Debug, Clone)]
pub struct DynamoDbVideoStore {
    client: Client,
}

impl DynamoDbVideoStore {
    /// Creates a store around an existing DynamoDB client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates a store whose client uses the credentials, region and optional
    /// endpoint from `config`.
    ///
    /// Nothing is contacted here. Bad credentials surface on the first scan.
    pub async fn from_config(config: &StoreConfig) -> Self {
        let credentials = Credentials::new(
            config.access_key_id.clone(),
            config.secret_access_key.clone(),
            None,
            None,
            CREDENTIALS_PROVIDER_NAME,
        );

        let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()))
            .credentials_provider(credentials);

        if let Some(endpoint) = &config.endpoint_url {
            sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
        }

        let sdk_config = sdk_config_loader.load().await;
        Self::new(Client::new(&sdk_config))
    }
}

#[async_trait]
impl VideoStore for DynamoDbVideoStore {
    async fn scan_all(&self, table_name: &str) -> Result<ResultSet> {
        let output = self
            .client
            .scan()
            .table_name(table_name)
            .send()
            .await
            .map_err(|e| map_scan_error(e, table_name))?;

        // One page only; a table over the 1 MB page limit comes back truncated.
        if output
            .last_evaluated_key()
            .is_some_and(|key| !key.is_empty())
        {
            tracing::warn!(
                table = table_name,
                returned = output.count(),
                "Scan returned a partial result set"
            );
        }

        output.items().iter().map(item_from_attributes).collect()
    }
}
