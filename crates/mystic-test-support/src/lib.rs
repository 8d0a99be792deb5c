//! Shared test mocks and utilities for the Mystic tarot reading engine.

mod clock;
mod oracle;
mod rng;

pub use clock::FixedClock;
pub use oracle::{FailingOracle, GatedOracle, ScriptedOracle};
pub use rng::{MockRng, SequenceRng};
