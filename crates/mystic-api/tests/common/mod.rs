//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mystic_core::clock::Clock;
use mystic_core::oracle::NarrativeOracle;
use mystic_core::rng::SeededRng;
use mystic_session::application::runtime::{SessionHandle, SessionRuntime};
use mystic_session::application::timings::PhaseTimings;
use mystic_session::domain::aggregates::SessionState;
use mystic_session::domain::phase::SessionPhase;
use mystic_test_support::FixedClock;
use tower::ServiceExt;

use mystic_api::state::AppState;

/// Fixed timestamp used across all integration tests.
fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock::at(2026, 1, 15, 10, 0, 0))
}

/// Build the full app router over a seeded session with zero animation
/// delays. Uses the same route structure as `main.rs`.
pub fn build_test_app(oracle: Arc<dyn NarrativeOracle>) -> (Router, SessionHandle) {
    let session = SessionRuntime::spawn(
        SessionState::default(),
        Box::new(SeededRng::from_seed(31)),
        oracle,
        fixed_clock(),
        PhaseTimings::immediate(),
    );
    let app = mystic_api::app(AppState::new(session.clone()));
    (app, session)
}

/// Wait until the session reaches `phase`.
pub async fn wait_for_phase(session: &SessionHandle, phase: SessionPhase) {
    let mut receiver = session.subscribe();
    tokio::time::timeout(Duration::from_secs(5), receiver.wait_for(|s| s.phase == phase))
        .await
        .expect("timed out waiting for phase")
        .expect("session runtime stopped");
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    send(app, request).await
}

/// Send a POST request without a body and return the response.
pub async fn post_empty(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
