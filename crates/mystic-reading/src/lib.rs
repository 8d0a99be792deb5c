//! Mystic — Narrative Orchestration bounded context.
//!
//! Turns a dealt spread into a request for the narrative oracle, recovers
//! every oracle failure into fallback text, and renders the resulting
//! markdown for presentation.

pub mod application;
pub mod domain;
