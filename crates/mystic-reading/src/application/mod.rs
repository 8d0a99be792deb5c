//! Application layer for the Narrative Orchestration context.

pub mod fetch;
