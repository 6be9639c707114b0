use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use videos_core::ApiResponse;

use crate::state::AppState;

/// List every video (GET /videos).
#[axum::debug_handler]
pub async fn list_videos(State(state): State<AppState>) -> Response {
    into_http_response(state.handler.list_videos().await)
}

/// Turn the function's response into an HTTP response with a JSON body.
pub fn into_http_response(response: ApiResponse) -> Response {
    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        response.body,
    )
        .into_response()
}
