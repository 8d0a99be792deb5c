//! Mystic Core — shared domain abstractions.
//!
//! This crate defines the fundamental traits and types that the deck,
//! reading, and session contexts depend on. It contains no infrastructure
//! code.

pub mod clock;
pub mod error;
pub mod oracle;
pub mod rng;
