use super::domain::{AnalyzeResult, InjuryInput, RiskLevel};
use super::narrative::{likely_issue, monitor_for, recommendations, ScoreCard};
use super::random::{RandomSource, ThreadRandom};
use super::scoring;

/// Stateless evaluator that turns validated answers into an [`AnalyzeResult`].
///
/// The only state is the random source used for the two flavor metrics, so a
/// single engine can be shared across concurrent requests.
pub struct ScoringEngine<S = ThreadRandom> {
    source: S,
}

impl<S: RandomSource> ScoringEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn analyze(&self, input: &InjuryInput) -> AnalyzeResult {
        let structural_risk = scoring::final_structural_risk(input);
        let doms_probability = scoring::doms_probability(input);
        let strain_score = scoring::strain_score(input);

        let catastrophizing_index =
            scoring::catastrophizing_index(input, structural_risk, &self.source);
        let risk_level = RiskLevel::from_structural_risk(structural_risk);

        let scores = ScoreCard {
            structural_risk,
            doms_probability,
            strain_score,
            catastrophizing_index,
        };
        let google_spiral_probability = scoring::google_spiral_probability(
            catastrophizing_index,
            structural_risk,
            &self.source,
        );

        AnalyzeResult {
            risk_level,
            structural_risk,
            doms_probability,
            strain_score,
            catastrophizing_index,
            likely_issue: likely_issue(&scores, risk_level).to_string(),
            recommendations: recommendations(risk_level),
            monitor_for: monitor_for(risk_level, input.previous_injury),
            google_spiral_probability,
        }
    }
}
