//! Routes for the Session lifecycle bounded context.
//!
//! Every command endpoint returns the snapshot after the intent was applied.
//! An intent that does not fit the current phase is not an error; it returns
//! the unchanged snapshot.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use mystic_reading::domain::markdown::render_html;
use mystic_reading::domain::reading::ReadingSource;
use mystic_session::domain::intents::Intent;
use mystic_session::domain::snapshot::SessionSnapshot;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /cut.
#[derive(Debug, Deserialize)]
pub struct CutRequest {
    /// Number of cards lifted off the bottom and moved under the rest.
    pub index: usize,
}

/// Response body for GET /reading.
#[derive(Debug, Serialize)]
pub struct ReadingResponse {
    /// Narrative as returned by the oracle, empty until resolved.
    pub markdown: String,
    /// The narrative rendered to HTML.
    pub html: String,
    /// Whether the narrative came from the oracle or is the fallback.
    pub source: Option<ReadingSource>,
}

async fn dispatch(state: &AppState, intent: Intent) -> Result<Json<SessionSnapshot>, ApiError> {
    let correlation_id = Uuid::new_v4();
    info!(%correlation_id, intent = intent.intent_type(), "dispatching session intent");

    let snapshot = state.session.dispatch(intent).await?;

    info!(%correlation_id, phase = ?snapshot.phase, "session intent applied");
    Ok(Json(snapshot))
}

/// GET /
#[instrument(skip(state))]
async fn get_session(State(state): State<AppState>) -> Json<SessionSnapshot> {
    Json(state.session.snapshot())
}

/// POST /begin
#[instrument(skip(state))]
async fn begin(State(state): State<AppState>) -> Result<Json<SessionSnapshot>, ApiError> {
    dispatch(&state, Intent::Begin).await
}

/// POST /cut
#[instrument(skip(state, request), fields(index = request.index))]
async fn cut(
    State(state): State<AppState>,
    Json(request): Json<CutRequest>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    dispatch(
        &state,
        Intent::CutAt {
            index: request.index,
        },
    )
    .await
}

/// POST /draw
#[instrument(skip(state))]
async fn draw(State(state): State<AppState>) -> Result<Json<SessionSnapshot>, ApiError> {
    dispatch(&state, Intent::Draw).await
}

/// POST /reveal
#[instrument(skip(state))]
async fn reveal(State(state): State<AppState>) -> Result<Json<SessionSnapshot>, ApiError> {
    dispatch(&state, Intent::Reveal).await
}

/// POST /reset
#[instrument(skip(state))]
async fn reset(State(state): State<AppState>) -> Result<Json<SessionSnapshot>, ApiError> {
    dispatch(&state, Intent::Reset).await
}

/// GET /reading
#[instrument(skip(state))]
async fn get_reading(State(state): State<AppState>) -> Json<ReadingResponse> {
    let snapshot = state.session.snapshot();
    Json(ReadingResponse {
        html: render_html(&snapshot.narrative_text),
        markdown: snapshot.narrative_text,
        source: snapshot.narrative_source,
    })
}

/// Returns the router for the session context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_session))
        .route("/begin", post(begin))
        .route("/cut", post(cut))
        .route("/draw", post(draw))
        .route("/reveal", post(reveal))
        .route("/reset", post(reset))
        .route("/reading", get(get_reading))
}
