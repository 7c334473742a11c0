//! Application state.
//!
//! Carries the immutable settings snapshot shared by all handlers.

use std::sync::Arc;

use crate::config::Settings;

/// Application state handed to the router.
///
/// The settings snapshot is constructed once at startup and read-only
/// afterwards, so cloning the state is cheap and concurrent reads are safe.
#[derive(Clone)]
pub struct AppState {
    /// Validated configuration snapshot
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Create application state from a settings snapshot.
    pub fn new(settings: Arc<Settings>) -> Self {
        Self { settings }
    }
}
