use super::common::*;
use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

fn post_json(path: &str, body: impl Into<Body>) -> Request<Body> {
    Request::post(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .expect("request builds")
}

fn scenario_a_payload() -> Value {
    json!({
        "pain_location": "Lower back",
        "pain_type": "Sharp",
        "pain_scale": 9,
        "radiates": true,
        "improved_after_warmup": false,
        "sharp_during_lift": true,
        "swelling": true,
        "previous_injury": false,
        "onset_timing": "During lift",
        "light_load_possible": false,
    })
}

#[tokio::test]
async fn analyze_route_returns_full_result() {
    let router = router_with(EdgeDraw::Low);

    let response = router
        .oneshot(post_json(
            "/api/analyze/",
            serde_json::to_vec(&scenario_a_payload()).expect("encode payload"),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["risk_level"], "RED");
    assert_eq!(body["structural_risk"], 100);
    assert_eq!(body["doms_probability"], 0);
    assert_eq!(body["strain_score"], 20);
    assert_eq!(body["catastrophizing_index"], 20);
    assert_eq!(body["google_spiral_probability"], 30);
    assert_eq!(
        body["likely_issue"],
        "Possible structural concern — get it checked."
    );
    assert_eq!(body["recommendations"].as_array().map(Vec::len), Some(3));
    assert_eq!(body["monitor_for"].as_array().map(Vec::len), Some(4));
}

#[tokio::test]
async fn analyze_route_accepts_path_without_trailing_slash() {
    let router = router_with(EdgeDraw::High);

    let response = router
        .oneshot(post_json(
            "/api/analyze",
            serde_json::to_vec(&raw_payload()).expect("encode payload"),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["risk_level"], "GREEN");
    assert_eq!(body["catastrophizing_index"], 90);
    assert_eq!(body["google_spiral_probability"], 95);
    assert_eq!(
        body["monitor_for"].as_array().and_then(|items| items.last()),
        Some(&json!("Re-injury or pain in same spot"))
    );
}

#[tokio::test]
async fn malformed_json_returns_error_shape() {
    let router = router_with(EdgeDraw::Low);

    let response = router
        .oneshot(post_json("/api/analyze/", "{\"pain_scale\": "))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(response).await;
    assert_eq!(body, json!({ "error": "Invalid JSON." }));
}

#[tokio::test]
async fn validation_failure_returns_detail_shape() {
    let router = router_with(EdgeDraw::Low);
    let mut payload = raw_payload();
    payload["pain_scale"] = json!(11);

    let response = router
        .oneshot(post_json(
            "/api/analyze/",
            serde_json::to_vec(&payload).expect("encode payload"),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(response).await;
    assert_eq!(
        body,
        json!({ "detail": "pain_scale must be an integer between 1 and 10." })
    );
}

#[tokio::test]
async fn non_object_body_is_a_validation_failure() {
    let router = router_with(EdgeDraw::Low);

    let response = router
        .oneshot(post_json("/api/analyze/", "[1, 2, 3]"))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(response).await;
    assert_eq!(body["detail"], "Request body must be a JSON object.");
}

#[tokio::test]
async fn options_route_lists_closed_sets() {
    let router = router_with(EdgeDraw::Low);

    let response = router
        .oneshot(
            Request::get("/api/options/")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["pain_locations"].as_array().map(Vec::len), Some(11));
    assert_eq!(body["pain_types"][0], "Dull ache");
    assert_eq!(
        body["onset_timing"],
        json!(["During lift", "Hours after workout", "Next day"])
    );
}

#[tokio::test]
async fn options_route_accepts_path_without_trailing_slash() {
    let router = router_with(EdgeDraw::Low);

    let response = router
        .oneshot(
            Request::get("/api/options")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["pain_types"].as_array().map(Vec::len), Some(6));
}

#[tokio::test]
async fn oversized_body_returns_json_error_shape() {
    let router = router_with(EdgeDraw::Low).layer(DefaultBodyLimit::max(64));
    let body = serde_json::to_vec(&scenario_a_payload()).expect("encode payload");
    assert!(body.len() > 64);

    let response = router
        .oneshot(post_json("/api/analyze/", body))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let body = read_json_body(response).await;
    assert_eq!(body, json!({ "error": "Request body too large." }));
}

#[tokio::test]
async fn analyze_route_rejects_get() {
    let router = router_with(EdgeDraw::Low);

    let response = router
        .oneshot(
            Request::get("/api/analyze/")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
