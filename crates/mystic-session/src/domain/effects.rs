//! Side effects requested by a transition.
//!
//! The reducer never sleeps or performs I/O; it describes the work and the
//! runtime carries it out.

use mystic_deck::spread::{DrawnCard, SPREAD_SIZE};

use super::intents::Intent;

/// Which presentation delay a scheduled intent waits for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Shuffle animation.
    Shuffle,
    /// Cut animation.
    Cut,
    /// Card deal animation.
    Deal,
}

/// Work the runtime must perform after a transition commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Deliver `intent` once the `timer` delay has elapsed.
    Schedule {
        /// The delay to wait for.
        timer: TimerKind,
        /// The follow-up intent to deliver.
        intent: Intent,
    },
    /// Fetch the narrative for `cards` and deliver it as
    /// `Intent::NarrativeResolved` tagged with `generation`.
    FetchNarrative {
        /// Generation the fetch is issued under.
        generation: u64,
        /// The spread, in Past/Present/Future order.
        cards: [DrawnCard; SPREAD_SIZE],
    },
}
