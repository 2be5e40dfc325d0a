//! Application state for Axum handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::storage::TaskStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Task store backend.
    pub store: Arc<dyn TaskStore>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(config: Arc<AppConfig>, store: Arc<dyn TaskStore>) -> Self {
        Self { config, store }
    }
}
