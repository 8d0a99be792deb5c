//! Test RNG — deterministic `DeterministicRng` implementations for tests.

use mystic_core::rng::DeterministicRng;

/// A no-op RNG that always returns `0` for `next_index` and `0.0` for
/// `next_f64`. Suitable for tests that do not depend on specific random
/// values. Shuffles become a fixed rotation and every dealt card is reversed.
#[derive(Debug)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_index(&mut self, _upper: usize) -> usize {
        0
    }

    fn next_f64(&mut self) -> f64 {
        0.0
    }
}

/// An RNG that returns values from predetermined sequences. Panics if the
/// index sequence is exhausted; `next_f64` falls back to `0.0` once its
/// sequence runs out. Used in tests that need specific, repeatable shuffles
/// and reversal coins.
#[derive(Debug)]
pub struct SequenceRng {
    indices: Vec<usize>,
    index: usize,
    floats: Vec<f64>,
    float_index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given index values.
    #[must_use]
    pub fn new(indices: Vec<usize>) -> Self {
        Self {
            indices,
            index: 0,
            floats: Vec::new(),
            float_index: 0,
        }
    }

    /// Sets the values returned by `next_f64`.
    #[must_use]
    pub fn with_floats(mut self, floats: Vec<f64>) -> Self {
        self.floats = floats;
        self
    }
}

impl DeterministicRng for SequenceRng {
    fn next_index(&mut self, upper: usize) -> usize {
        let val = self.indices[self.index];
        self.index += 1;
        assert!(val <= upper, "scripted index {val} exceeds upper bound {upper}");
        val
    }

    fn next_f64(&mut self) -> f64 {
        let val = self.floats.get(self.float_index).copied().unwrap_or(0.0);
        self.float_index += 1;
        val
    }
}
