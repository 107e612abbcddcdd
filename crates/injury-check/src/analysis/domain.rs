use serde::{Deserialize, Serialize};
use std::fmt;

/// Body region the user reports pain in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PainLocation {
    Shoulder,
    Elbow,
    Wrist,
    #[serde(rename = "Upper back")]
    UpperBack,
    #[serde(rename = "Lower back")]
    LowerBack,
    Hip,
    Knee,
    Ankle,
    Neck,
    Chest,
    Other,
}

impl PainLocation {
    pub const ALL: [Self; 11] = [
        Self::Shoulder,
        Self::Elbow,
        Self::Wrist,
        Self::UpperBack,
        Self::LowerBack,
        Self::Hip,
        Self::Knee,
        Self::Ankle,
        Self::Neck,
        Self::Chest,
        Self::Other,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Shoulder => "Shoulder",
            Self::Elbow => "Elbow",
            Self::Wrist => "Wrist",
            Self::UpperBack => "Upper back",
            Self::LowerBack => "Lower back",
            Self::Hip => "Hip",
            Self::Knee => "Knee",
            Self::Ankle => "Ankle",
            Self::Neck => "Neck",
            Self::Chest => "Chest",
            Self::Other => "Other",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|item| item.label() == value)
    }
}

/// How the pain feels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PainType {
    #[serde(rename = "Dull ache")]
    DullAche,
    Sharp,
    Burning,
    Localized,
    Throbbing,
    Other,
}

impl PainType {
    pub const ALL: [Self; 6] = [
        Self::DullAche,
        Self::Sharp,
        Self::Burning,
        Self::Localized,
        Self::Throbbing,
        Self::Other,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::DullAche => "Dull ache",
            Self::Sharp => "Sharp",
            Self::Burning => "Burning",
            Self::Localized => "Localized",
            Self::Throbbing => "Throbbing",
            Self::Other => "Other",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|item| item.label() == value)
    }
}

/// When the pain first showed up relative to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OnsetTiming {
    #[serde(rename = "During lift")]
    DuringLift,
    #[serde(rename = "Hours after workout")]
    HoursAfterWorkout,
    #[serde(rename = "Next day")]
    NextDay,
}

impl OnsetTiming {
    pub const ALL: [Self; 3] = [Self::DuringLift, Self::HoursAfterWorkout, Self::NextDay];

    pub const fn label(self) -> &'static str {
        match self {
            Self::DuringLift => "During lift",
            Self::HoursAfterWorkout => "Hours after workout",
            Self::NextDay => "Next day",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|item| item.label() == value)
    }
}

impl fmt::Display for PainLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for PainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for OnsetTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Self-reported pain intensity, guaranteed to sit in 1..=10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PainScale(u8);

impl PainScale {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

/// Validated questionnaire answers. Every field is already in its legal domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InjuryInput {
    pub pain_location: PainLocation,
    pub pain_type: PainType,
    pub pain_scale: PainScale,
    pub radiates: bool,
    pub improved_after_warmup: bool,
    pub sharp_during_lift: bool,
    pub swelling: bool,
    pub previous_injury: bool,
    pub onset_timing: OnsetTiming,
    pub light_load_possible: bool,
}

impl InjuryInput {
    pub fn pain(&self) -> u8 {
        self.pain_scale.get()
    }
}

/// Three-tier classification derived from the final structural risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Green,
    Yellow,
    Red,
}

impl RiskLevel {
    pub const fn from_structural_risk(structural_risk: u8) -> Self {
        if structural_risk >= 70 {
            Self::Red
        } else if structural_risk >= 40 {
            Self::Yellow
        } else {
            Self::Green
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Green => "GREEN",
            Self::Yellow => "YELLOW",
            Self::Red => "RED",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Response body for a single analysis. Field order matches the wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeResult {
    pub risk_level: RiskLevel,
    pub structural_risk: u8,
    pub doms_probability: u8,
    pub strain_score: u8,
    pub catastrophizing_index: u8,
    pub likely_issue: String,
    pub recommendations: Vec<String>,
    pub monitor_for: Vec<String>,
    pub google_spiral_probability: u8,
}

/// Allowed labels for every enumerated questionnaire field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceCatalog {
    pub pain_locations: Vec<&'static str>,
    pub pain_types: Vec<&'static str>,
    pub onset_timing: Vec<&'static str>,
}

impl ChoiceCatalog {
    pub fn standard() -> Self {
        Self {
            pain_locations: PainLocation::ALL.iter().map(|item| item.label()).collect(),
            pain_types: PainType::ALL.iter().map(|item| item.label()).collect(),
            onset_timing: OnsetTiming::ALL.iter().map(|item| item.label()).collect(),
        }
    }
}
