//! The three-card Past/Present/Future spread.

use mystic_core::error::DomainError;
use mystic_core::oracle::{CardReading, ReadingRequest};
use mystic_core::rng::DeterministicRng;
use serde::Serialize;
use tracing::debug;

use crate::catalog::CardDefinition;
use crate::deck::draw_top;

/// Number of cards in a spread.
pub const SPREAD_SIZE: usize = 3;

/// Probability that a drawn card lands reversed.
const REVERSAL_ODDS: f64 = 0.5;

/// Position of a card within the spread, in draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    /// First card removed from the deck.
    Past,
    /// Second card removed from the deck.
    Present,
    /// Third card removed from the deck.
    Future,
}

impl Position {
    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Position::Past => "Past",
            Position::Present => "Present",
            Position::Future => "Future",
        }
    }
}

/// A card dealt into the spread. Immutable for the rest of the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawnCard {
    /// The card identity.
    pub card: CardDefinition,
    /// Where the card sits in the spread.
    pub position: Position,
    /// Whether the card was dealt inverted.
    pub is_reversed: bool,
}

impl DrawnCard {
    /// Collaborator-facing view of this card.
    #[must_use]
    pub fn to_reading(&self) -> CardReading {
        CardReading {
            name: self.card.name.clone(),
            is_reversed: self.is_reversed,
        }
    }
}

/// Deals the top three cards into Past, Present, Future in removal order,
/// flipping one independent fair coin per card for its orientation.
///
/// Returns the remaining deck and the spread.
///
/// # Errors
///
/// Returns `DomainError::InsufficientCards` if the deck holds fewer than three.
pub fn deal_spread(
    deck: &[CardDefinition],
    rng: &mut dyn DeterministicRng,
) -> Result<(Vec<CardDefinition>, [DrawnCard; SPREAD_SIZE]), DomainError> {
    let (remaining, drawn) = draw_top(deck, SPREAD_SIZE)?;
    let [past, present, future]: [CardDefinition; SPREAD_SIZE] =
        drawn
            .try_into()
            .map_err(|cards: Vec<CardDefinition>| DomainError::InsufficientCards {
                requested: SPREAD_SIZE,
                available: cards.len(),
            })?;
    let mut deal = |card: CardDefinition, position: Position| {
        let is_reversed = rng.next_f64() < REVERSAL_ODDS;
        debug!(card = %card.name, position = position.label(), is_reversed, "card dealt");
        DrawnCard {
            card,
            position,
            is_reversed,
        }
    };
    let spread = [
        deal(past, Position::Past),
        deal(present, Position::Present),
        deal(future, Position::Future),
    ];
    Ok((remaining, spread))
}

/// Builds the collaborator request for a spread.
///
/// # Errors
///
/// Returns `DomainError::InvalidCardCount` unless exactly three cards are given.
pub fn reading_request(cards: &[DrawnCard]) -> Result<ReadingRequest, DomainError> {
    match cards {
        [past, present, future] => Ok(ReadingRequest {
            past: past.to_reading(),
            present: present.to_reading(),
            future: future.to_reading(),
        }),
        other => Err(DomainError::InvalidCardCount(other.len())),
    }
}
