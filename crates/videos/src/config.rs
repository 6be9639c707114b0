use std::{env, fmt};

use thiserror::Error;
use videos_core::VIDEOS_TABLE;

/// Access key id for the store client.
pub const ACCESS_KEY_ID_VAR: &str = "ACCESSKEYID";
/// Secret access key for the store client. The misspelling is the name the
/// deployed function has always been given; do not correct it here alone.
pub const SECRET_ACCESS_KEY_VAR: &str = "SECERTACCESCKEY";
/// AWS region of the table.
pub const REGION_VAR: &str = "REGION";
/// Optional table name override.
pub const TABLE_NAME_VAR: &str = "VIDEOS_TABLE_NAME";
/// Optional endpoint override, e.g. `http://localhost:8000` for DynamoDB Local.
pub const ENDPOINT_URL_VAR: &str = "AWS_ENDPOINT_URL";

/// Errors that can occur while loading configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),
}

/// Connection parameters for the videos store.
///
/// Built once at startup and never mutated afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub region: String,
    pub table_name: String,
    pub endpoint_url: Option<String>,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ACCESSKEYID` - access key id (required)
    /// - `SECERTACCESCKEY` - secret access key (required)
    /// - `REGION` - AWS region (required)
    /// - `VIDEOS_TABLE_NAME` - table to scan (default: "videos")
    /// - `AWS_ENDPOINT_URL` - endpoint override (default: none)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let required = |key: &'static str| non_blank(key).ok_or(ConfigError::MissingVar(key));

        Ok(Self {
            access_key_id: required(ACCESS_KEY_ID_VAR)?,
            secret_access_key: required(SECRET_ACCESS_KEY_VAR)?,
            region: required(REGION_VAR)?,
            table_name: non_blank(TABLE_NAME_VAR).unwrap_or_else(|| VIDEOS_TABLE.to_string()),
            endpoint_url: non_blank(ENDPOINT_URL_VAR),
        })
    }
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("region", &self.region)
            .field("table_name", &self.table_name)
            .field("endpoint_url", &self.endpoint_url)
            .finish()
    }
}
