use std::collections::VecDeque;
use std::ops::RangeInclusive;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::{json, Value};

use crate::analysis::domain::{InjuryInput, OnsetTiming, PainLocation, PainScale, PainType};
use crate::analysis::random::RandomSource;
use crate::analysis::{analysis_router, ScoringEngine};

/// Always answers with one end of the requested range.
#[derive(Debug, Clone, Copy)]
pub(super) enum EdgeDraw {
    Low,
    High,
}

impl RandomSource for EdgeDraw {
    fn draw(&self, range: RangeInclusive<u8>) -> u8 {
        match self {
            EdgeDraw::Low => *range.start(),
            EdgeDraw::High => *range.end(),
        }
    }
}

/// Replays queued values and records which ranges were requested.
#[derive(Debug, Default)]
pub(super) struct ScriptedDraws {
    values: Mutex<VecDeque<u8>>,
    requested: Mutex<Vec<RangeInclusive<u8>>>,
}

impl ScriptedDraws {
    pub(super) fn new(values: impl IntoIterator<Item = u8>) -> Self {
        Self {
            values: Mutex::new(values.into_iter().collect()),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn requested(&self) -> Vec<RangeInclusive<u8>> {
        self.requested.lock().expect("draw mutex poisoned").clone()
    }
}

impl RandomSource for ScriptedDraws {
    fn draw(&self, range: RangeInclusive<u8>) -> u8 {
        let value = self
            .values
            .lock()
            .expect("draw mutex poisoned")
            .pop_front()
            .expect("scripted draw available");
        assert!(range.contains(&value), "{value} outside {range:?}");
        self.requested
            .lock()
            .expect("draw mutex poisoned")
            .push(range);
        value
    }
}

pub(super) fn scale(value: u8) -> PainScale {
    PainScale::new(value).expect("pain scale within 1..=10")
}

/// Neutral answers: structural 0, doms 20, strain 40.
pub(super) fn baseline() -> InjuryInput {
    InjuryInput {
        pain_location: PainLocation::Knee,
        pain_type: PainType::Other,
        pain_scale: scale(5),
        radiates: false,
        improved_after_warmup: false,
        sharp_during_lift: false,
        swelling: false,
        previous_injury: false,
        onset_timing: OnsetTiming::HoursAfterWorkout,
        light_load_possible: true,
    }
}

pub(super) fn severe_back() -> InjuryInput {
    InjuryInput {
        pain_location: PainLocation::LowerBack,
        pain_type: PainType::Sharp,
        pain_scale: scale(9),
        radiates: true,
        improved_after_warmup: false,
        sharp_during_lift: true,
        swelling: true,
        previous_injury: false,
        onset_timing: OnsetTiming::DuringLift,
        light_load_possible: false,
    }
}

pub(super) fn next_day_soreness() -> InjuryInput {
    InjuryInput {
        pain_location: PainLocation::Hip,
        pain_type: PainType::DullAche,
        pain_scale: scale(4),
        radiates: false,
        improved_after_warmup: true,
        sharp_during_lift: false,
        swelling: false,
        previous_injury: false,
        onset_timing: OnsetTiming::NextDay,
        light_load_possible: true,
    }
}

pub(super) fn raw_payload() -> Value {
    json!({
        "pain_location": "Shoulder",
        "pain_type": "Throbbing",
        "pain_scale": 6,
        "radiates": false,
        "improved_after_warmup": true,
        "sharp_during_lift": false,
        "swelling": false,
        "previous_injury": true,
        "onset_timing": "Hours after workout",
        "light_load_possible": true,
    })
}

pub(super) fn router_with<S: RandomSource + 'static>(source: S) -> axum::Router {
    analysis_router(Arc::new(ScoringEngine::new(source)))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
