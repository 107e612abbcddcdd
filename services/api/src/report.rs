use clap::Args;
use injury_check::analysis::{
    validate_payload, AnalyzeResult, ChoiceCatalog, InjuryInput, RandomSource, ScoringEngine,
    SeededRandom, ThreadRandom,
};
use injury_check::error::AppError;
use serde_json::{json, Value};
use std::fmt::Write as _;

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Where it hurts, e.g. "Lower back"
    #[arg(long)]
    pub(crate) location: String,
    /// How it feels, e.g. "Dull ache"
    #[arg(long)]
    pub(crate) pain_type: String,
    /// Pain intensity from 1 to 10
    #[arg(long)]
    pub(crate) scale: String,
    /// When it started: "During lift", "Hours after workout" or "Next day"
    #[arg(long)]
    pub(crate) onset: String,
    /// Pain spreads away from the spot
    #[arg(long)]
    pub(crate) radiates: bool,
    /// Pain eased once warmed up
    #[arg(long)]
    pub(crate) improved_after_warmup: bool,
    /// Sharp pain during the lift itself
    #[arg(long)]
    pub(crate) sharp_during_lift: bool,
    /// Visible swelling
    #[arg(long)]
    pub(crate) swelling: bool,
    /// Same area was injured before
    #[arg(long)]
    pub(crate) previous_injury: bool,
    /// Light loading is still possible
    #[arg(long)]
    pub(crate) light_load_possible: bool,
    /// Seed the flavor metrics for reproducible output
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Print the raw JSON response instead of the report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct OptionsArgs {
    /// Print the catalog as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let payload = questionnaire_payload(&args);
    let input = validate_payload(&payload)?;

    let result = match args.seed {
        Some(seed) => analyze_with(SeededRandom::new(seed), &input),
        None => analyze_with(ThreadRandom, &input),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_report(&input, &result));
    }
    Ok(())
}

pub(crate) fn run_options(args: OptionsArgs) -> Result<(), AppError> {
    let catalog = ChoiceCatalog::standard();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    println!("Pain locations: {}", catalog.pain_locations.join(", "));
    println!("Pain types: {}", catalog.pain_types.join(", "));
    println!("Onset timing: {}", catalog.onset_timing.join(", "));
    Ok(())
}

fn analyze_with<S: RandomSource>(source: S, input: &InjuryInput) -> AnalyzeResult {
    ScoringEngine::new(source).analyze(input)
}

/// Mirror the HTTP body so the CLI goes through the same validation.
pub(crate) fn questionnaire_payload(args: &AnalyzeArgs) -> Value {
    json!({
        "pain_location": args.location,
        "pain_type": args.pain_type,
        "pain_scale": args.scale,
        "radiates": args.radiates,
        "improved_after_warmup": args.improved_after_warmup,
        "sharp_during_lift": args.sharp_during_lift,
        "swelling": args.swelling,
        "previous_injury": args.previous_injury,
        "onset_timing": args.onset,
        "light_load_possible": args.light_load_possible,
    })
}

pub(crate) fn render_report(input: &InjuryInput, result: &AnalyzeResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Injury check");
    let _ = writeln!(
        out,
        "Answers: {} | {} | pain {}/10 | onset {}",
        input.pain_location,
        input.pain_type,
        input.pain(),
        input.onset_timing
    );
    let _ = writeln!(
        out,
        "\nRisk level: {} (structural risk {})",
        result.risk_level, result.structural_risk
    );
    let _ = writeln!(out, "Likely issue: {}", result.likely_issue);

    let _ = writeln!(out, "\nScores");
    for (label, value) in [
        ("Structural risk", result.structural_risk),
        ("DOMS probability", result.doms_probability),
        ("Strain score", result.strain_score),
        ("Catastrophizing index", result.catastrophizing_index),
        ("Google spiral probability", result.google_spiral_probability),
    ] {
        let _ = writeln!(out, "- {label}: {value}");
    }

    let _ = writeln!(out, "\nRecommendations");
    for item in &result.recommendations {
        let _ = writeln!(out, "- {item}");
    }

    let _ = writeln!(out, "\nMonitor for");
    for item in &result.monitor_for {
        let _ = writeln!(out, "- {item}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use injury_check::analysis::RiskLevel;

    fn args() -> AnalyzeArgs {
        AnalyzeArgs {
            location: "Knee".to_string(),
            pain_type: "Dull ache".to_string(),
            scale: "4".to_string(),
            onset: "Next day".to_string(),
            radiates: false,
            improved_after_warmup: true,
            sharp_during_lift: false,
            swelling: false,
            previous_injury: true,
            light_load_possible: true,
            seed: Some(1),
            json: false,
        }
    }

    #[test]
    fn flag_answers_pass_through_the_validator() {
        let input = validate_payload(&questionnaire_payload(&args())).expect("flags validate");

        assert_eq!(input.pain(), 4);
        assert!(input.previous_injury);
        assert!(input.light_load_possible);
    }

    #[test]
    fn unknown_location_is_reported_as_validation_error() {
        let mut args = args();
        args.location = "Foot".to_string();

        let err = run_analyze(args).expect_err("unknown location rejected");
        assert!(matches!(err, AppError::Validation(_)));
        assert!(err.to_string().contains("pain_location must be one of"));
    }

    #[test]
    fn report_lists_scores_and_guidance() {
        let input = validate_payload(&questionnaire_payload(&args())).expect("flags validate");
        let result = analyze_with(SeededRandom::new(1), &input);

        let report = render_report(&input, &result);

        assert_eq!(result.risk_level, RiskLevel::Green);
        assert!(report.contains("Answers: Knee | Dull ache | pain 4/10 | onset Next day"));
        assert!(report.contains("Risk level: GREEN (structural risk 0)"));
        assert!(report.contains("- DOMS probability: 90"));
        assert!(report.contains("- Train a different muscle group today."));
        assert!(report.contains("- Re-injury or pain in same spot"));
    }
}
