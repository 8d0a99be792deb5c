//! Pure deck transformations.
//!
//! Every operation takes the deck by slice and returns a new `Vec`; the input
//! is never mutated. The top of the deck is the end of the sequence.

use mystic_core::error::DomainError;
use mystic_core::rng::DeterministicRng;

/// Returns a uniformly random permutation of `deck` (Fisher–Yates).
///
/// For `i` from the last index down to 1, swaps element `i` with the element
/// at an index drawn uniformly from `[0, i]`.
pub fn shuffle<T: Clone>(deck: &[T], rng: &mut dyn DeterministicRng) -> Vec<T> {
    let mut shuffled = deck.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.next_index(i);
        shuffled.swap(i, j);
    }
    shuffled
}

/// Rotates `deck` so that `deck[index..]` becomes the new front.
///
/// `index == 0` and `index == deck.len()` leave the order unchanged.
///
/// # Errors
///
/// Returns `DomainError::InvalidIndex` if `index > deck.len()`.
pub fn cut<T: Clone>(deck: &[T], index: usize) -> Result<Vec<T>, DomainError> {
    if index > deck.len() {
        return Err(DomainError::InvalidIndex {
            index,
            len: deck.len(),
        });
    }
    let (bottom, top) = deck.split_at(index);
    let mut rotated = Vec::with_capacity(deck.len());
    rotated.extend_from_slice(top);
    rotated.extend_from_slice(bottom);
    Ok(rotated)
}

/// Pops the top `n` cards.
///
/// Returns the remaining deck and the drawn cards in removal order: the first
/// element is the card that was on top.
///
/// # Errors
///
/// Returns `DomainError::InsufficientCards` if the deck holds fewer than `n`.
pub fn draw_top<T: Clone>(deck: &[T], n: usize) -> Result<(Vec<T>, Vec<T>), DomainError> {
    if deck.len() < n {
        return Err(DomainError::InsufficientCards {
            requested: n,
            available: deck.len(),
        });
    }
    let (remaining, top) = deck.split_at(deck.len() - n);
    let drawn = top.iter().rev().cloned().collect();
    Ok((remaining.to_vec(), drawn))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use mystic_core::rng::SeededRng;
    use mystic_test_support::{MockRng, SequenceRng};

    use super::*;

    fn sorted(mut cards: Vec<u32>) -> Vec<u32> {
        cards.sort_unstable();
        cards
    }

    // --- shuffle ---

    #[test]
    fn test_shuffle_follows_fisher_yates_swaps() {
        // Arrange: swaps (3,1), (2,2), (1,0)
        let deck = vec!['a', 'b', 'c', 'd'];
        let mut rng = SequenceRng::new(vec![1, 2, 0]);

        // Act
        let shuffled = shuffle(&deck, &mut rng);

        // Assert
        assert_eq!(shuffled, vec!['d', 'a', 'c', 'b']);
        assert_eq!(deck, vec!['a', 'b', 'c', 'd']);
    }

    #[test]
    fn test_shuffle_preserves_multiset_and_length() {
        for seed in 0..200 {
            let deck: Vec<u32> = (0..78).collect();
            let mut rng = SeededRng::from_seed(seed);

            let shuffled = shuffle(&deck, &mut rng);

            assert_eq!(shuffled.len(), deck.len());
            assert_eq!(sorted(shuffled), deck);
        }
    }

    #[test]
    fn test_shuffle_of_empty_and_single_card_decks() {
        let mut rng = MockRng;

        assert!(shuffle::<u32>(&[], &mut rng).is_empty());
        assert_eq!(shuffle(&[7], &mut rng), vec![7]);
    }

    #[test]
    fn test_shuffle_is_statistically_uniform_over_small_deck() {
        // Arrange
        let deck = [0u8, 1, 2];
        let mut rng = SeededRng::from_seed(2026);
        let trials = 60_000;
        let mut counts: HashMap<Vec<u8>, usize> = HashMap::new();

        // Act
        for _ in 0..trials {
            *counts.entry(shuffle(&deck, &mut rng)).or_default() += 1;
        }

        // Assert: all 3! permutations appear within 10% of the expected 10_000.
        assert_eq!(counts.len(), 6);
        for (permutation, count) in counts {
            assert!(
                (9_000..=11_000).contains(&count),
                "permutation {permutation:?} occurred {count} times"
            );
        }
    }

    // --- cut ---

    #[test]
    fn test_cut_rotates_suffix_to_front() {
        let deck = vec!['a', 'b', 'c', 'd', 'e'];

        let rotated = cut(&deck, 3).unwrap();

        assert_eq!(rotated, vec!['d', 'e', 'a', 'b', 'c']);
    }

    #[test]
    fn test_cut_at_bounds_is_noop() {
        let deck: Vec<u32> = (0..10).collect();

        assert_eq!(cut(&deck, 0).unwrap(), deck);
        assert_eq!(cut(&deck, deck.len()).unwrap(), deck);
    }

    #[test]
    fn test_cut_back_restores_original_order() {
        let deck: Vec<u32> = (0..78).collect();

        for i in 0..=deck.len() {
            let once = cut(&deck, i).unwrap();
            assert_eq!(sorted(once.clone()), deck);

            let restored = cut(&once, deck.len() - i).unwrap();
            assert_eq!(restored, deck);
        }
    }

    #[test]
    fn test_cut_out_of_range_returns_invalid_index() {
        let deck = vec![1, 2, 3];

        let result = cut(&deck, 4);

        assert_eq!(
            result.unwrap_err(),
            DomainError::InvalidIndex { index: 4, len: 3 }
        );
    }

    // --- draw_top ---

    #[test]
    fn test_draw_top_pops_from_end_in_removal_order() {
        let deck = vec![10, 20, 30, 40, 50];

        let (remaining, drawn) = draw_top(&deck, 3).unwrap();

        assert_eq!(remaining, vec![10, 20]);
        assert_eq!(drawn, vec![50, 40, 30]);
    }

    #[test]
    fn test_draw_top_partitions_the_deck() {
        let deck: Vec<u32> = (0..78).collect();

        let (remaining, drawn) = draw_top(&deck, 3).unwrap();

        assert_eq!(remaining.len(), 75);
        assert_eq!(drawn.len(), 3);
        assert!(drawn.iter().all(|card| !remaining.contains(card)));
        let mut union = remaining;
        union.extend(drawn);
        assert_eq!(sorted(union), deck);
    }

    #[test]
    fn test_draw_top_from_short_deck_returns_insufficient_cards() {
        let deck = vec![1, 2];

        let result = draw_top(&deck, 3);

        assert_eq!(
            result.unwrap_err(),
            DomainError::InsufficientCards {
                requested: 3,
                available: 2
            }
        );
    }
}
