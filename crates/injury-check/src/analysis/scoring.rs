//! Point rules behind each score. Every score is summed, then clamped to 0..=100.

use super::domain::{InjuryInput, OnsetTiming, PainType};
use super::random::RandomSource;

const SCORE_FLOOR: i32 = 0;
const SCORE_CEILING: i32 = 100;

/// Floor applied when radiating pain, swelling and pain >= 8 coincide.
pub const RADIATING_SWELLING_FLOOR: u8 = 70;
/// Ceiling applied when pain_scale <= 3.
pub const LOW_PAIN_CEILING: u8 = 39;
/// Escalation for a prior injury once risk reaches the yellow band.
pub const PREVIOUS_INJURY_ESCALATION: u8 = 10;

fn clamp_score(points: i32) -> u8 {
    points.clamp(SCORE_FLOOR, SCORE_CEILING) as u8
}

/// Likelihood of a non-muscular injury, before the override rules.
pub fn structural_risk(input: &InjuryInput) -> u8 {
    let mut points = 0;
    if input.pain() >= 8 {
        points += 25;
    }
    if input.radiates {
        points += 30;
    }
    if input.swelling {
        points += 25;
    }
    if input.sharp_during_lift {
        points += 20;
    }
    if !input.light_load_possible {
        points += 20;
    }
    if input.previous_injury {
        points += 10;
    }
    if input.improved_after_warmup {
        points -= 15;
    }
    clamp_score(points)
}

pub fn doms_probability(input: &InjuryInput) -> u8 {
    let mut points = 0;
    if input.onset_timing == OnsetTiming::NextDay {
        points += 30;
    }
    if input.improved_after_warmup {
        points += 20;
    }
    if input.pain_type == PainType::DullAche {
        points += 20;
    }
    if !input.swelling {
        points += 10;
    }
    if input.pain() <= 6 {
        points += 10;
    }
    clamp_score(points)
}

pub fn strain_score(input: &InjuryInput) -> u8 {
    let mut points = 0;
    if input.sharp_during_lift {
        points += 20;
    }
    if input.pain_type == PainType::Localized {
        points += 20;
    }
    if (5..=7).contains(&input.pain()) {
        points += 20;
    }
    if !input.radiates {
        points += 10;
    }
    if input.light_load_possible {
        points += 10;
    }
    clamp_score(points)
}

/// Apply the three structural overrides in order: radiating floor, low-pain
/// ceiling, previous-injury escalation.
///
/// The floor needs pain >= 8 and the ceiling needs pain <= 3, so the first two
/// rules never both fire for one input. Retuning either threshold breaks that.
pub fn apply_structural_overrides(input: &InjuryInput, base: u8) -> u8 {
    let mut risk = base;
    if input.radiates && input.swelling && input.pain() >= 8 {
        risk = risk.max(RADIATING_SWELLING_FLOOR);
    }
    if input.pain() <= 3 {
        risk = risk.min(LOW_PAIN_CEILING);
    }
    if input.previous_injury && risk >= 40 {
        risk = clamp_score(i32::from(risk) + i32::from(PREVIOUS_INJURY_ESCALATION));
    }
    risk
}

/// Final structural risk: base points followed by the overrides.
pub fn final_structural_risk(input: &InjuryInput) -> u8 {
    apply_structural_overrides(input, structural_risk(input))
}

fn looks_like_overreaction(input: &InjuryInput, structural_risk: u8) -> bool {
    structural_risk < 40
        && input.pain() <= 6
        && !input.swelling
        && !input.radiates
        && input.improved_after_warmup
}

pub fn catastrophizing_index<S>(input: &InjuryInput, structural_risk: u8, source: &S) -> u8
where
    S: RandomSource + ?Sized,
{
    if looks_like_overreaction(input, structural_risk) {
        source.draw(70..=90)
    } else {
        source.draw(20..=40)
    }
}

/// Drawn after [`catastrophizing_index`]; depends on the sampled value.
pub fn google_spiral_probability<S>(
    catastrophizing_index: u8,
    structural_risk: u8,
    source: &S,
) -> u8
where
    S: RandomSource + ?Sized,
{
    if catastrophizing_index > 70 && structural_risk < 40 {
        source.draw(85..=95)
    } else {
        source.draw(30..=50)
    }
}
