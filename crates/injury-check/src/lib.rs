//! Symptom questionnaire intake and heuristic injury-risk scoring.
//!
//! Raw request payloads pass through [`analysis::validate_payload`] and are
//! scored by [`analysis::ScoringEngine`]. The HTTP surface lives in
//! [`analysis::analysis_router`]; process wiring (config, telemetry, errors)
//! is shared with the service binary.

pub mod analysis;
pub mod config;
pub mod error;
pub mod telemetry;
