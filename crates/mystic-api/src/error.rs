//! Mystic — API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mystic_core::error::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The narrative oracle's HTTP client could not be built.
    #[error("http client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer wrapper around `DomainError` that implements `IntoResponse`.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self.0 {
            DomainError::InvalidIndex { .. } => (StatusCode::BAD_REQUEST, "invalid_index"),
            DomainError::InsufficientCards { .. } => {
                (StatusCode::BAD_REQUEST, "insufficient_cards")
            }
            DomainError::InvalidCardCount(_) => (StatusCode::BAD_REQUEST, "invalid_card_count"),
            DomainError::NarrativeFetchFailure(_) => {
                (StatusCode::BAD_GATEWAY, "narrative_fetch_failure")
            }
            DomainError::Unavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, "unavailable"),
        };

        let body = ErrorBody {
            error: error_code,
            message: self.0.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde_json::Value;

    fn status_of(err: DomainError) -> StatusCode {
        let response = ApiError(err).into_response();
        response.status()
    }

    #[test]
    fn test_invalid_index_maps_to_400() {
        assert_eq!(
            status_of(DomainError::InvalidIndex { index: 80, len: 78 }),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_insufficient_cards_maps_to_400() {
        assert_eq!(
            status_of(DomainError::InsufficientCards {
                requested: 3,
                available: 1,
            }),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_invalid_card_count_maps_to_400() {
        assert_eq!(
            status_of(DomainError::InvalidCardCount(2)),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_narrative_fetch_failure_maps_to_502() {
        assert_eq!(
            status_of(DomainError::NarrativeFetchFailure("timeout".into())),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_unavailable_maps_to_503() {
        assert_eq!(
            status_of(DomainError::Unavailable("stopped".into())),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[tokio::test]
    async fn test_error_body_carries_code_and_message() {
        let response = ApiError(DomainError::InvalidIndex { index: 80, len: 78 }).into_response();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(json["error"], "invalid_index");
        assert_eq!(
            json["message"],
            "cut index 80 is out of range for a deck of 78 cards"
        );
    }
}
