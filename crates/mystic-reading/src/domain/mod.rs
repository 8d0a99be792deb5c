//! Domain layer for the Narrative Orchestration context.

pub mod markdown;
pub mod reading;
