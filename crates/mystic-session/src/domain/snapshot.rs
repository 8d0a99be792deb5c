//! Read-only view of a session for the presentation layer.

use chrono::{DateTime, Utc};
use mystic_deck::catalog::CardDefinition;
use mystic_deck::spread::{DrawnCard, SPREAD_SIZE};
use mystic_reading::domain::reading::ReadingSource;
use serde::Serialize;

use super::phase::SessionPhase;

/// Snapshot of a session, refreshed after every transition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    /// Current phase.
    pub phase: SessionPhase,
    /// Number of resets this session has gone through.
    pub generation: u64,
    /// Remaining deck, bottom first; the last card is the top.
    pub deck: Vec<CardDefinition>,
    /// Past, Present, Future slots; empty until the spread is dealt.
    pub drawn_cards: [Option<DrawnCard>; SPREAD_SIZE],
    /// Narrative markdown, empty until resolved.
    pub narrative_text: String,
    /// Whether the narrative came from the oracle or is the fallback.
    pub narrative_source: Option<ReadingSource>,
    /// When the narrative arrived.
    pub narrative_received_at: Option<DateTime<Utc>>,
    /// Whether a narrative fetch is in flight.
    pub is_loading: bool,
    /// Pending cut index, present only while `Cutting`.
    pub cut_marker: Option<usize>,
}
