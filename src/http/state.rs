//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::Settings;
use crate::store::ProjectStore;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Project records for the lifetime of the process
    pub store: ProjectStore,
    /// Settings resolved at startup
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Create a new application state with the given store and settings.
    pub fn new(store: ProjectStore, settings: Settings) -> Self {
        Self {
            store,
            settings: Arc::new(settings),
        }
    }
}
