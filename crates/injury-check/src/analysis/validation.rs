use super::domain::{InjuryInput, OnsetTiming, PainLocation, PainScale, PainType};
use serde_json::{Map, Value};

/// Rejection raised while turning a raw payload into an [`InjuryInput`].
///
/// The `Display` output is the human-readable detail returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Request body must be a JSON object.")]
    NotAnObject,
    #[error(
        "pain_scale must be an integer between {min} and {max}.",
        min = PainScale::MIN,
        max = PainScale::MAX
    )]
    PainScale,
    #[error("{field} must be one of: {}", .allowed.join(", "))]
    UnknownChoice {
        field: &'static str,
        allowed: Vec<&'static str>,
    },
}

impl ValidationError {
    /// Name of the offending field, when the rejection concerns one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::NotAnObject => None,
            ValidationError::PainScale => Some("pain_scale"),
            ValidationError::UnknownChoice { field, .. } => Some(field),
        }
    }
}

/// Validate an untyped payload, coercing `pain_scale` and the boolean answers.
pub fn validate_payload(payload: &Value) -> Result<InjuryInput, ValidationError> {
    let body = payload.as_object().ok_or(ValidationError::NotAnObject)?;

    let pain_scale = coerce_pain_scale(body.get("pain_scale")).ok_or(ValidationError::PainScale)?;
    let pain_location = choice(
        body,
        "pain_location",
        PainLocation::from_label,
        &PainLocation::ALL.map(PainLocation::label),
    )?;
    let pain_type = choice(
        body,
        "pain_type",
        PainType::from_label,
        &PainType::ALL.map(PainType::label),
    )?;
    let onset_timing = choice(
        body,
        "onset_timing",
        OnsetTiming::from_label,
        &OnsetTiming::ALL.map(OnsetTiming::label),
    )?;

    Ok(InjuryInput {
        pain_location,
        pain_type,
        pain_scale,
        radiates: flag(body, "radiates"),
        improved_after_warmup: flag(body, "improved_after_warmup"),
        sharp_during_lift: flag(body, "sharp_during_lift"),
        swelling: flag(body, "swelling"),
        previous_injury: flag(body, "previous_injury"),
        onset_timing,
        light_load_possible: flag(body, "light_load_possible"),
    })
}

/// JavaScript-style truthiness for loosely typed form answers.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn flag(body: &Map<String, Value>, field: &str) -> bool {
    body.get(field).is_some_and(truthy)
}

fn coerce_pain_scale(value: Option<&Value>) -> Option<PainScale> {
    let number = match value? {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    if !number.is_finite() || number.fract() != 0.0 {
        return None;
    }
    if number < f64::from(PainScale::MIN) || number > f64::from(PainScale::MAX) {
        return None;
    }
    PainScale::new(number as u8)
}

fn choice<T>(
    body: &Map<String, Value>,
    field: &'static str,
    parse: fn(&str) -> Option<T>,
    allowed: &[&'static str],
) -> Result<T, ValidationError> {
    body.get(field)
        .and_then(Value::as_str)
        .and_then(parse)
        .ok_or_else(|| ValidationError::UnknownChoice {
            field,
            allowed: allowed.to_vec(),
        })
}
