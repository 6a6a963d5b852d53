//! Application state for the roster engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::storage::RosterStore;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// station configuration and the storage backend.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    store: Arc<dyn RosterStore>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: ConfigLoader, store: Arc<dyn RosterStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a reference to the storage backend.
    pub fn store(&self) -> &dyn RosterStore {
        self.store.as_ref()
    }
}
