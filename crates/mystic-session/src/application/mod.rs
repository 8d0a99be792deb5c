//! Application layer for the Session lifecycle context.

pub mod runtime;
pub mod timings;
