//! Shared application state.

use mystic_session::application::runtime::SessionHandle;

/// Application state shared across all request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Handle to the running session.
    pub session: SessionHandle,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(session: SessionHandle) -> Self {
        Self { session }
    }
}
