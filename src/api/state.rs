//! Application state for the split engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::roster::{RosterManager, SharedRoster};

/// Shared application state.
///
/// Holds the loaded configuration and the single session roster. Handlers
/// go through [`SharedRoster`] so concurrent requests are serialized.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    roster: SharedRoster,
}

impl AppState {
    /// Creates a new application state with a fresh session sized by the
    /// configuration.
    pub fn new(config: ConfigLoader) -> Self {
        let roster = SharedRoster::new(RosterManager::from_config(config.session()));
        Self {
            config: Arc::new(config),
            roster,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the session roster.
    pub fn roster(&self) -> &SharedRoster {
        &self.roster
    }
}
