//! Application state for the HTTP server.

use crate::config::Config;
use std::sync::Arc;

/// Shared, read-only state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
