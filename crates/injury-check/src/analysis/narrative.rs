use super::domain::RiskLevel;

/// The four numeric scores consulted by the narrative mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreCard {
    pub structural_risk: u8,
    pub doms_probability: u8,
    pub strain_score: u8,
    pub catastrophizing_index: u8,
}

pub const REINJURY_WATCH_ITEM: &str = "Re-injury or pain in same spot";

const GREEN_RECOMMENDATIONS: [&str; 3] = [
    "Train a different muscle group today.",
    "Light cardio is fine.",
    "Include mobility work.",
];

const YELLOW_RECOMMENDATIONS: [&str; 3] = [
    "Avoid heavy compound lifts on this area.",
    "No max effort for 48 hours.",
    "Reassess in 48 hours.",
];

const RED_RECOMMENDATIONS: [&str; 3] = [
    "Stop loading this area.",
    "Consider seeing a physio if it persists.",
    "Avoid aggressive stretching.",
];

const GREEN_MONITOR: &[&str] = &["Pain getting worse", "New swelling", "Radiating pain"];

const YELLOW_MONITOR: &[&str] = &["Increasing swelling", "Radiating pain", "Loss of strength"];

const RED_MONITOR: &[&str] = &[
    "Increasing swelling",
    "Radiating pain",
    "Loss of strength",
    "Numbness or tingling",
];

impl RiskLevel {
    pub const fn recommendations(self) -> &'static [&'static str; 3] {
        match self {
            Self::Green => &GREEN_RECOMMENDATIONS,
            Self::Yellow => &YELLOW_RECOMMENDATIONS,
            Self::Red => &RED_RECOMMENDATIONS,
        }
    }

    /// Warning signs worth watching, before any history-specific additions.
    pub const fn monitor_baseline(self) -> &'static [&'static str] {
        match self {
            Self::Green => GREEN_MONITOR,
            Self::Yellow => YELLOW_MONITOR,
            Self::Red => RED_MONITOR,
        }
    }
}

pub fn likely_issue(scores: &ScoreCard, level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Red => "Possible structural concern — get it checked.",
        RiskLevel::Yellow if scores.strain_score >= 50 => {
            "Likely muscle strain. Ease off and reassess."
        }
        RiskLevel::Yellow => "Moderate concern. Avoid heavy loading and reassess in 48h.",
        RiskLevel::Green if scores.catastrophizing_index >= 70 => {
            "Likely normal soreness. You are probably fine."
        }
        RiskLevel::Green if scores.doms_probability >= 60 => {
            "Delayed onset muscle soreness. This looks like classic post-workout soreness."
        }
        RiskLevel::Green if scores.strain_score >= 40 => {
            "Mild strain possible. Light movement and mobility are fine."
        }
        RiskLevel::Green => "Likely normal soreness. Light activity and mobility are okay.",
    }
}

pub fn recommendations(level: RiskLevel) -> Vec<String> {
    level
        .recommendations()
        .iter()
        .map(|item| item.to_string())
        .collect()
}

pub fn monitor_for(level: RiskLevel, previous_injury: bool) -> Vec<String> {
    let mut items: Vec<String> = level
        .monitor_baseline()
        .iter()
        .map(|item| item.to_string())
        .collect();
    if previous_injury {
        items.push(REINJURY_WATCH_ITEM.to_string());
    }
    items
}
