use std::time::Duration;

use axum::{http::StatusCode, routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{handlers::videos::list_videos, state::AppState};

/// Create the local server router.
///
/// Exposes the function's single operation at `GET /videos`.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/videos", get(list_videos))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}
