//! Questionnaire validation, scoring, and guidance for the injury check.
//!
//! Control flow is one pass per request: raw JSON goes through
//! [`validate_payload`], the resulting [`InjuryInput`] is scored by
//! [`ScoringEngine::analyze`], and the [`AnalyzeResult`] is returned as-is.

pub mod domain;
mod engine;
pub mod narrative;
pub mod random;
pub mod router;
pub mod scoring;
mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    AnalyzeResult, ChoiceCatalog, InjuryInput, OnsetTiming, PainLocation, PainScale, PainType,
    RiskLevel,
};
pub use engine::ScoringEngine;
pub use narrative::ScoreCard;
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use router::analysis_router;
pub use validation::{truthy, validate_payload, ValidationError};
