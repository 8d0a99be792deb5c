//! Mystic — Session lifecycle bounded context.
//!
//! Owns the deck, the dealt spread, and the narrative of one reading, and
//! moves them through the phases
//! `Start → Shuffling → ReadyToCut → Cutting → ReadyToDraw → Drawing →
//! Revealing → Reading → Done`.
//!
//! The domain layer is a pure reducer: `(state, intent) -> (state', effects)`.
//! Timers and the narrative fetch are effects executed by the application
//! layer's runtime, which feeds their completion back as follow-up intents
//! tagged with the generation they were issued under.

pub mod application;
pub mod domain;
