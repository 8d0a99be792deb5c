//! Narrative oracle abstraction.
//!
//! The oracle is the external text-generation collaborator that turns a
//! three-card spread into an interpretation. Adapters live in their own
//! crates; the session only ever sees this trait.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::DomainError;

/// One card of a reading request, as sent to the collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardReading {
    /// Display name of the card.
    pub name: String,
    /// Whether the card was drawn reversed.
    pub is_reversed: bool,
}

impl CardReading {
    /// Returns `"Reversed"` or `"Upright"`.
    #[must_use]
    pub fn orientation(&self) -> &'static str {
        if self.is_reversed { "Reversed" } else { "Upright" }
    }
}

/// Structured request for a three-card Past/Present/Future reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadingRequest {
    /// Card in the Past position.
    pub past: CardReading,
    /// Card in the Present position.
    pub present: CardReading,
    /// Card in the Future position.
    pub future: CardReading,
}

impl ReadingRequest {
    /// Iterates `(position label, card)` in Past, Present, Future order.
    pub fn placements(&self) -> impl Iterator<Item = (&'static str, &CardReading)> {
        [
            ("Past", &self.past),
            ("Present", &self.present),
            ("Future", &self.future),
        ]
        .into_iter()
    }
}

/// Port for the narrative-generation collaborator.
#[async_trait]
pub trait NarrativeOracle: Send + Sync {
    /// Produces prose for the given spread.
    ///
    /// Any failure (network, auth, quota, timeout) is reported as
    /// `DomainError::NarrativeFetchFailure`.
    async fn interpret(&self, request: &ReadingRequest) -> Result<String, DomainError>;
}
