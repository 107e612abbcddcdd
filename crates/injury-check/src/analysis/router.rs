use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{debug, info};

use super::domain::ChoiceCatalog;
use super::engine::ScoringEngine;
use super::random::RandomSource;
use super::validation::validate_payload;

pub const ANALYZE_PATH: &str = "/api/analyze/";
pub const OPTIONS_PATH: &str = "/api/options/";

/// Router builder exposing the analysis and choice-listing endpoints.
pub fn analysis_router<S>(engine: Arc<ScoringEngine<S>>) -> Router
where
    S: RandomSource + 'static,
{
    Router::new()
        .route(ANALYZE_PATH, post(analyze_handler::<S>))
        .route("/api/analyze", post(analyze_handler::<S>))
        .route(OPTIONS_PATH, get(options_handler))
        .route("/api/options", get(options_handler))
        .with_state(engine)
}

pub(crate) async fn analyze_handler<S>(
    State(engine): State<Arc<ScoringEngine<S>>>,
    body: Result<Bytes, BytesRejection>,
) -> Response
where
    S: RandomSource + 'static,
{
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            let status = rejection.status();
            debug!(%status, reason = %rejection.body_text(), "rejected unreadable analysis body");
            let (status, message) = if status == StatusCode::PAYLOAD_TOO_LARGE {
                (status, "Request body too large.")
            } else {
                (StatusCode::BAD_REQUEST, "Invalid JSON.")
            };
            return (status, Json(json!({ "error": message }))).into_response();
        }
    };

    let payload: Value = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(err) => {
            debug!(error = %err, "rejected unparseable analysis body");
            let payload = json!({ "error": "Invalid JSON." });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    let input = match validate_payload(&payload) {
        Ok(input) => input,
        Err(err) => {
            debug!(field = err.field().unwrap_or("body"), "rejected analysis payload");
            let payload = json!({ "detail": err.to_string() });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    let result = engine.analyze(&input);
    info!(
        risk_level = %result.risk_level,
        structural_risk = result.structural_risk,
        location = %input.pain_location,
        "analysis completed"
    );

    (StatusCode::OK, Json(result)).into_response()
}

pub(crate) async fn options_handler() -> Json<ChoiceCatalog> {
    Json(ChoiceCatalog::standard())
}
