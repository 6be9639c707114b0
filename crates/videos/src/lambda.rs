//! AWS Lambda entry point.

use std::sync::Arc;

use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use videos_core::ApiResponse;

use crate::handler::VideoListHandler;

/// Set by the Lambda execution environment.
const RUNTIME_API_VAR: &str = "AWS_LAMBDA_RUNTIME_API";

/// Whether the process was started by the Lambda runtime.
pub fn is_lambda_environment() -> bool {
    std::env::var_os(RUNTIME_API_VAR).is_some()
}

/// Serve invocations until the runtime shuts the process down.
pub async fn run(handler: Arc<VideoListHandler>) -> Result<(), Error> {
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let handler = Arc::clone(&handler);
        async move { handle_event(&handler, event).await }
    }))
    .await
}

/// The event payload carries no input for this function and is ignored.
pub async fn handle_event(
    handler: &VideoListHandler,
    _event: LambdaEvent<Value>,
) -> Result<ApiResponse, Error> {
    Ok(handler.list_videos().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_runtime::Context;
    use serde_json::json;
    use videos_core::storage::InMemoryVideoStore;

    fn handler_with(items: Vec<videos_core::Item>) -> VideoListHandler {
        VideoListHandler::new(
            Arc::new(InMemoryVideoStore::with_table("videos", items)),
            "videos",
        )
    }

    #[tokio::test]
    async fn test_ignores_payload() {
        let handler = handler_with(Vec::new());
        let payload = json!({ "queryStringParameters": { "limit": "1" } });
        let event = LambdaEvent::new(payload, Context::default());

        let response = handle_event(&handler, event).await.unwrap();

        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, "[]");
    }

    #[tokio::test]
    async fn test_response_wire_shape() {
        let handler = VideoListHandler::new(Arc::new(InMemoryVideoStore::new()), "videos");
        let event = LambdaEvent::new(Value::Null, Context::default());

        let response = handle_event(&handler, event).await.unwrap();

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "statusCode": 500,
                "body": "{\"message\":\"Internal server error\"}",
            })
        );
    }
}
