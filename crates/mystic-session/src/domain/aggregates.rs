//! Aggregate root for the Session lifecycle context.

use chrono::{DateTime, Utc};
use mystic_core::error::DomainError;
use mystic_core::rng::DeterministicRng;
use mystic_deck::catalog::{CardDefinition, Catalog};
use mystic_deck::deck::{cut, shuffle};
use mystic_deck::spread::{DrawnCard, SPREAD_SIZE, deal_spread};
use mystic_reading::domain::reading::Reading;
use tracing::{debug, info};

use super::effects::{Effect, TimerKind};
use super::intents::Intent;
use super::phase::SessionPhase;
use super::snapshot::SessionSnapshot;

/// The state of one tarot reading session.
///
/// Invariant: `deck` plus the dealt cards is always the full catalog, each
/// card exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    catalog: &'static Catalog,
    /// Current phase.
    pub(crate) phase: SessionPhase,
    /// Incremented by every reset; tags timers and fetches.
    pub(crate) generation: u64,
    /// Remaining deck; the last element is the top.
    pub(crate) deck: Vec<CardDefinition>,
    /// The dealt spread.
    pub(crate) drawn: Option<[DrawnCard; SPREAD_SIZE]>,
    /// The narrative, once resolved.
    pub(crate) reading: Option<Reading>,
    /// When the narrative arrived.
    pub(crate) received_at: Option<DateTime<Utc>>,
    /// Whether a narrative fetch is in flight.
    pub(crate) is_loading: bool,
    /// Pending cut index while `Cutting`.
    pub(crate) cut_marker: Option<usize>,
}

/// Result of applying an intent: the next state and the effects to run.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// State after the intent.
    pub state: SessionState,
    /// Work the runtime must perform, in order.
    pub effects: Vec<Effect>,
}

impl Transition {
    fn to(state: SessionState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    fn with(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(Catalog::standard())
    }
}

impl SessionState {
    /// Creates a session in `Start` with the catalog's canonical deck.
    #[must_use]
    pub fn new(catalog: &'static Catalog) -> Self {
        Self::fresh(catalog, 0)
    }

    fn fresh(catalog: &'static Catalog, generation: u64) -> Self {
        Self {
            catalog,
            phase: SessionPhase::Start,
            generation,
            deck: catalog.fresh_deck(),
            drawn: None,
            reading: None,
            received_at: None,
            is_loading: false,
            cut_marker: None,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Current generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Remaining deck.
    #[must_use]
    pub fn deck(&self) -> &[CardDefinition] {
        &self.deck
    }

    /// The dealt spread, if any.
    #[must_use]
    pub fn drawn(&self) -> Option<&[DrawnCard; SPREAD_SIZE]> {
        self.drawn.as_ref()
    }

    /// The catalog this session deals from.
    #[must_use]
    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    /// Builds the presentation snapshot.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            generation: self.generation,
            deck: self.deck.clone(),
            drawn_cards: match &self.drawn {
                Some(cards) => cards.clone().map(Some),
                None => [None, None, None],
            },
            narrative_text: self
                .reading
                .as_ref()
                .map(|r| r.text.clone())
                .unwrap_or_default(),
            narrative_source: self.reading.as_ref().map(|r| r.source),
            narrative_received_at: self.received_at,
            is_loading: self.is_loading,
            cut_marker: self.cut_marker,
        }
    }

    /// Applies `intent` and returns the next state with its effects.
    ///
    /// Intents that do not match the current phase, and follow-ups from an
    /// older generation, return the state unchanged with no effects. Either
    /// the whole mutation applies or none of it does.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidIndex` for a cut outside `[0, deck len]`
    /// and `DomainError::InsufficientCards` when drawing from a deck of fewer
    /// than three cards. Both leave the state untouched.
    pub fn transition(
        &self,
        intent: &Intent,
        rng: &mut dyn DeterministicRng,
    ) -> Result<Transition, DomainError> {
        let generation = self.generation;
        let transition = match (self.phase, intent) {
            (SessionPhase::Start, Intent::Begin) => Transition::to(Self {
                phase: SessionPhase::Shuffling,
                ..self.clone()
            })
            .with(Effect::Schedule {
                timer: TimerKind::Shuffle,
                intent: Intent::ShuffleElapsed { generation },
            }),

            (SessionPhase::Shuffling, Intent::ShuffleElapsed { generation: tag })
                if *tag == generation =>
            {
                Transition::to(Self {
                    phase: SessionPhase::ReadyToCut,
                    deck: shuffle(&self.deck, rng),
                    drawn: None,
                    reading: None,
                    received_at: None,
                    ..self.clone()
                })
            }

            (SessionPhase::ReadyToCut, Intent::CutAt { index }) => {
                if *index > self.deck.len() {
                    return Err(DomainError::InvalidIndex {
                        index: *index,
                        len: self.deck.len(),
                    });
                }
                Transition::to(Self {
                    phase: SessionPhase::Cutting,
                    cut_marker: Some(*index),
                    ..self.clone()
                })
                .with(Effect::Schedule {
                    timer: TimerKind::Cut,
                    intent: Intent::CutElapsed { generation },
                })
            }

            (SessionPhase::Cutting, Intent::CutElapsed { generation: tag })
                if *tag == generation =>
            {
                match self.cut_marker {
                    Some(index) => Transition::to(Self {
                        phase: SessionPhase::ReadyToDraw,
                        deck: cut(&self.deck, index)?,
                        cut_marker: None,
                        ..self.clone()
                    }),
                    None => Transition::to(self.clone()),
                }
            }

            (SessionPhase::ReadyToDraw, Intent::Draw) => {
                let (deck, spread) = deal_spread(&self.deck, rng)?;
                Transition::to(Self {
                    phase: SessionPhase::Drawing,
                    deck,
                    drawn: Some(spread),
                    ..self.clone()
                })
                .with(Effect::Schedule {
                    timer: TimerKind::Deal,
                    intent: Intent::DealElapsed { generation },
                })
            }

            (SessionPhase::Drawing, Intent::DealElapsed { generation: tag })
                if *tag == generation =>
            {
                Transition::to(Self {
                    phase: SessionPhase::Revealing,
                    ..self.clone()
                })
            }

            (SessionPhase::Revealing, Intent::Reveal) => match &self.drawn {
                Some(cards) => Transition::to(Self {
                    phase: SessionPhase::Reading,
                    is_loading: true,
                    ..self.clone()
                })
                .with(Effect::FetchNarrative {
                    generation,
                    cards: cards.clone(),
                }),
                None => Transition::to(self.clone()),
            },

            (
                SessionPhase::Reading,
                Intent::NarrativeResolved {
                    generation: tag,
                    reading,
                    received_at,
                },
            ) if *tag == generation => Transition::to(Self {
                phase: SessionPhase::Done,
                reading: Some(reading.clone()),
                received_at: Some(*received_at),
                is_loading: false,
                ..self.clone()
            }),

            (phase, Intent::Reset) if phase != SessionPhase::Start => {
                Transition::to(Self::fresh(self.catalog, generation + 1))
            }

            (phase, intent) => {
                debug!(
                    ?phase,
                    intent = intent.intent_type(),
                    generation,
                    "ignoring intent"
                );
                return Ok(Transition::to(self.clone()));
            }
        };

        info!(
            intent = intent.intent_type(),
            from = ?self.phase,
            to = ?transition.state.phase,
            generation = transition.state.generation,
            "session transition"
        );
        Ok(transition)
    }
}
