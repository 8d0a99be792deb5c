//! Gemini adapter for the `NarrativeOracle` port.
//!
//! Sends a single `generateContent` request per reading to the Google
//! Generative Language REST API and returns the candidate text.

pub mod gemini_oracle;
pub mod prompt;
