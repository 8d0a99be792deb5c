//! Mystic tarot reading API server entry point.

use std::sync::Arc;

use mystic_api::config::AppConfig;
use mystic_api::error::AppError;
use mystic_api::state::AppState;
use mystic_core::clock::SystemClock;
use mystic_core::rng::{DeterministicRng, SeededRng};
use mystic_gemini::gemini_oracle::GeminiOracle;
use mystic_session::application::runtime::SessionRuntime;
use mystic_session::domain::aggregates::SessionState;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Mystic tarot reading API server");

    let config = AppConfig::from_env()?;

    let oracle = GeminiOracle::new(config.gemini.clone())?;
    let rng: Box<dyn DeterministicRng> = match config.rng_seed {
        Some(seed) => {
            tracing::info!(seed, "using fixed RNG seed");
            Box::new(SeededRng::from_seed(seed))
        }
        None => Box::new(SeededRng::from_os_entropy()),
    };

    let session = SessionRuntime::spawn(
        SessionState::default(),
        rng,
        Arc::new(oracle),
        Arc::new(SystemClock),
        config.timings,
    );

    // TODO: restrict CORS origins once the frontend host is fixed.
    let app = mystic_api::app(AppState::new(session))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
