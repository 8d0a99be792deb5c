//! Session phases.

use serde::Serialize;

/// The single authoritative phase of a session.
///
/// Phases advance strictly in declaration order; only a reset returns to
/// `Start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// Fresh canonical deck, nothing dealt.
    Start,
    /// Shuffle animation running; the deck is shuffled when it elapses.
    Shuffling,
    /// Waiting for the user to pick a cut point.
    ReadyToCut,
    /// Cut animation running; the deck is rotated when it elapses.
    Cutting,
    /// Waiting for the user to draw.
    ReadyToDraw,
    /// Cards are dealt; the deal animation is running.
    Drawing,
    /// Cards are face up; waiting for the user to ask for the reading.
    Revealing,
    /// Narrative fetch in flight.
    Reading,
    /// Narrative stored.
    Done,
}

impl SessionPhase {
    /// Every phase in canonical order.
    pub const ORDER: [SessionPhase; 9] = [
        SessionPhase::Start,
        SessionPhase::Shuffling,
        SessionPhase::ReadyToCut,
        SessionPhase::Cutting,
        SessionPhase::ReadyToDraw,
        SessionPhase::Drawing,
        SessionPhase::Revealing,
        SessionPhase::Reading,
        SessionPhase::Done,
    ];

    /// Position of this phase in the canonical order.
    #[must_use]
    pub fn ordinal(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_matches_canonical_order() {
        for (i, phase) in SessionPhase::ORDER.iter().enumerate() {
            assert_eq!(phase.ordinal(), i);
        }
    }

    #[test]
    fn test_phase_serializes_snake_case() {
        let json = serde_json::to_value(SessionPhase::ReadyToCut).unwrap();

        assert_eq!(json, "ready_to_cut");
    }
}
