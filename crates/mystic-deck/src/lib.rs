//! Mystic Deck — the fixed card catalog and the pure deck operations
//! (shuffle, cut, draw) the session state machine is built from.

pub mod catalog;
pub mod deck;
pub mod spread;
