//! Test oracles — mock `NarrativeOracle` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use mystic_core::error::DomainError;
use mystic_core::oracle::{NarrativeOracle, ReadingRequest};
use tokio::sync::Notify;

/// An oracle that answers every request with the same text and records each
/// request it receives.
#[derive(Debug)]
pub struct ScriptedOracle {
    response: String,
    requests: Mutex<Vec<ReadingRequest>>,
}

impl ScriptedOracle {
    /// Create a new oracle that will answer with `response`.
    #[must_use]
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Returns a snapshot of all requests received so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn requests(&self) -> Vec<ReadingRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl NarrativeOracle for ScriptedOracle {
    async fn interpret(&self, request: &ReadingRequest) -> Result<String, DomainError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self.response.clone())
    }
}

/// An oracle that always fails. Useful for testing the fallback path.
#[derive(Debug)]
pub struct FailingOracle;

#[async_trait]
impl NarrativeOracle for FailingOracle {
    async fn interpret(&self, _request: &ReadingRequest) -> Result<String, DomainError> {
        Err(DomainError::NarrativeFetchFailure(
            "quota exhausted".to_owned(),
        ))
    }
}

/// An oracle that holds every request until [`GatedOracle::release`] is
/// called. Used to simulate arbitrary latency, e.g. a reset landing while a
/// fetch is still in flight.
#[derive(Debug)]
pub struct GatedOracle {
    response: String,
    gate: Notify,
}

impl GatedOracle {
    /// Create a new gated oracle that will answer with `response` once released.
    #[must_use]
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            gate: Notify::new(),
        }
    }

    /// Lets one pending (or the next) request complete.
    pub fn release(&self) {
        self.gate.notify_one();
    }
}

#[async_trait]
impl NarrativeOracle for GatedOracle {
    async fn interpret(&self, _request: &ReadingRequest) -> Result<String, DomainError> {
        self.gate.notified().await;
        Ok(self.response.clone())
    }
}
