//! HTTP-shaped response returned by the function.
//!
//! The shape matches what API Gateway's Lambda proxy integration expects:
//! a numeric `statusCode` and a `body` string that already holds the JSON
//! document.

use serde::{Deserialize, Serialize};

use crate::video::Item;

/// Message sent to callers whenever anything goes wrong.
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal server error";

/// Response produced by one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub body: String,
}

impl ApiResponse {
    /// 200 response whose body is the JSON array of `items`, order preserved.
    pub fn ok_json(items: &[Item]) -> Result<Self, serde_json::Error> {
        Ok(Self {
            status_code: 200,
            body: serde_json::to_string(items)?,
        })
    }

    /// Generic 500 response. Carries no detail about the underlying failure.
    pub fn internal_server_error() -> Self {
        Self {
            status_code: 500,
            body: serde_json::json!({ "message": INTERNAL_SERVER_ERROR_MESSAGE }).to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}
