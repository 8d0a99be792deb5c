//! Domain layer for the Session lifecycle context.

pub mod aggregates;
pub mod effects;
pub mod intents;
pub mod phase;
pub mod snapshot;
