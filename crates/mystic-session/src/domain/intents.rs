//! Intents accepted by the session state machine.

use chrono::{DateTime, Utc};
use mystic_reading::domain::reading::Reading;

/// Something that asks the session to change.
///
/// The first five variants come from the presentation layer. The rest are
/// follow-ups scheduled by the session itself and carry the generation they
/// were issued under; a follow-up from an older generation is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Start shuffling a fresh deck.
    Begin,
    /// Cut the deck at `index`.
    CutAt {
        /// Number of cards lifted off the bottom and moved under the rest.
        index: usize,
    },
    /// Deal the three-card spread.
    Draw,
    /// Ask for the narrative.
    Reveal,
    /// Abandon the current reading and start over.
    Reset,
    /// The shuffle animation finished.
    ShuffleElapsed {
        /// Generation the timer was scheduled under.
        generation: u64,
    },
    /// The cut animation finished.
    CutElapsed {
        /// Generation the timer was scheduled under.
        generation: u64,
    },
    /// The deal animation finished.
    DealElapsed {
        /// Generation the timer was scheduled under.
        generation: u64,
    },
    /// The narrative fetch finished (successfully or with fallback text).
    NarrativeResolved {
        /// Generation the fetch was issued under.
        generation: u64,
        /// The narrative.
        reading: Reading,
        /// When the narrative arrived.
        received_at: DateTime<Utc>,
    },
}

impl Intent {
    /// The type name for this intent (for logging).
    #[must_use]
    pub fn intent_type(&self) -> &'static str {
        match self {
            Intent::Begin => "session.begin",
            Intent::CutAt { .. } => "session.cut_at",
            Intent::Draw => "session.draw",
            Intent::Reveal => "session.reveal",
            Intent::Reset => "session.reset",
            Intent::ShuffleElapsed { .. } => "session.shuffle_elapsed",
            Intent::CutElapsed { .. } => "session.cut_elapsed",
            Intent::DealElapsed { .. } => "session.deal_elapsed",
            Intent::NarrativeResolved { .. } => "session.narrative_resolved",
        }
    }
}
