//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
///
/// `InvalidIndex`, `InsufficientCards`, and `InvalidCardCount` signal a
/// caller bug: the intent surface never offers them. `NarrativeFetchFailure`
/// is expected and is recovered into fallback text before it reaches a
/// session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A cut index fell outside `[0, len]`.
    #[error("cut index {index} is out of range for a deck of {len} cards")]
    InvalidIndex {
        /// The rejected index.
        index: usize,
        /// Length of the deck being cut.
        len: usize,
    },

    /// A draw asked for more cards than the deck holds.
    #[error("cannot draw {requested} cards from a deck of {available}")]
    InsufficientCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        available: usize,
    },

    /// A reading was requested with a spread that is not exactly three cards.
    #[error("a three-card reading requires exactly 3 cards, got {0}")]
    InvalidCardCount(usize),

    /// The narrative collaborator failed (network, auth, quota, timeout).
    #[error("narrative fetch failed: {0}")]
    NarrativeFetchFailure(String),

    /// The session runtime is no longer accepting intents.
    #[error("session unavailable: {0}")]
    Unavailable(String),
}
