//! Mystic — HTTP presentation bridge.
//!
//! Exposes the session snapshot and forwards presentation intents to the
//! session runtime.

use axum::Router;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

/// Builds the application router without middleware layers.
pub fn app(app_state: state::AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/session", routes::session::router())
        .with_state(app_state)
}
