//! Narrative fetch orchestration.
//!
//! Validates the spread, delegates to the oracle, and converts every oracle
//! failure into the fallback reading so a session can always finish.

use mystic_core::error::DomainError;
use mystic_core::oracle::NarrativeOracle;
use mystic_deck::spread::{DrawnCard, reading_request};
use tracing::{info, warn};

use crate::domain::reading::Reading;

/// Fetches the narrative for a spread.
///
/// # Errors
///
/// Returns `DomainError::InvalidCardCount` if `cards` is not exactly three
/// cards. Oracle failures are never returned; they become
/// [`Reading::fallback`].
pub async fn fetch_reading(
    oracle: &dyn NarrativeOracle,
    cards: &[DrawnCard],
) -> Result<Reading, DomainError> {
    let request = reading_request(cards)?;

    match oracle.interpret(&request).await {
        Ok(text) => {
            info!(chars = text.len(), "narrative received");
            Ok(Reading::from_oracle(text))
        }
        Err(error) => {
            warn!(%error, "narrative oracle failed, using fallback text");
            Ok(Reading::fallback())
        }
    }
}

#[cfg(test)]
mod tests {
    use mystic_deck::catalog::Catalog;
    use mystic_deck::spread::deal_spread;
    use mystic_test_support::{FailingOracle, MockRng, ScriptedOracle, SequenceRng};

    use super::*;
    use crate::domain::reading::{FALLBACK_TEXT, ReadingSource};

    fn spread() -> Vec<DrawnCard> {
        let deck = Catalog::standard().fresh_deck();
        let mut rng = SequenceRng::new(vec![]).with_floats(vec![0.9, 0.1, 0.9]);
        let (_, cards) = deal_spread(&deck, &mut rng).unwrap();
        cards.to_vec()
    }

    #[tokio::test]
    async fn test_fetch_reading_sends_cards_in_position_order() {
        // Arrange
        let oracle = ScriptedOracle::new("## The Past\n\nA quiet ending.");
        let cards = spread();

        // Act
        let reading = fetch_reading(&oracle, &cards).await.unwrap();

        // Assert
        assert_eq!(reading.text, "## The Past\n\nA quiet ending.");
        assert_eq!(reading.source, ReadingSource::Oracle);

        let requests = oracle.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.past.name, "King of Pentacles");
        assert!(!request.past.is_reversed);
        assert_eq!(request.present.name, "Queen of Pentacles");
        assert!(request.present.is_reversed);
        assert_eq!(request.future.name, "Knight of Pentacles");
        assert!(!request.future.is_reversed);
    }

    #[tokio::test]
    async fn test_fetch_reading_recovers_oracle_failure_as_fallback() {
        let cards = spread();

        let reading = fetch_reading(&FailingOracle, &cards).await.unwrap();

        assert_eq!(reading.text, FALLBACK_TEXT);
        assert_eq!(
            reading.text,
            "The cosmos is currently clouded. Please try again later."
        );
        assert_eq!(reading.source, ReadingSource::Fallback);
    }

    #[tokio::test]
    async fn test_fetch_reading_rejects_wrong_card_count_without_calling_oracle() {
        // Arrange
        let oracle = ScriptedOracle::new("unused");
        let deck = Catalog::standard().fresh_deck();
        let (_, cards) = deal_spread(&deck, &mut MockRng).unwrap();

        // Act
        let result = fetch_reading(&oracle, &cards[..2]).await;

        // Assert
        assert_eq!(result.unwrap_err(), DomainError::InvalidCardCount(2));
        assert!(oracle.requests().is_empty());
    }
}
