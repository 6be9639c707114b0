//! Shared state for the local HTTP server.

use std::sync::Arc;

use crate::handler::VideoListHandler;

/// Cloned into every request; only holds the read-only handler.
#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<VideoListHandler>,
}

impl AppState {
    pub fn new(handler: VideoListHandler) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }
}
