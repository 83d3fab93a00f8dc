//! # Integration Tests for esg-api
//!
//! Drives the full router with `tower::ServiceExt::oneshot`: analysis
//! responses and their JSON contract, request validation, health,
//! OpenAPI generation, CORS and the request counters.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use esg_api::state::AppState;
use esg_engine::EngineConfig;
use esg_rules::RuleSet;

fn test_app() -> axum::Router {
    esg_api::app(AppState::new())
}

async fn body_json(response: axum::http::Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_analyze(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/analyze")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

fn post_text(text: &str) -> Request<Body> {
    post_analyze(serde_json::to_string(&serde_json::json!({ "text": text })).unwrap())
}

// -- Analyze ------------------------------------------------------------------

#[tokio::test]
async fn analyze_returns_contract_shape() {
    let response = test_app()
        .oneshot(post_text(
            "The company disclosed a chemical spill and emissions breach, currently facing \
             an ongoing investigation and pending lawsuit.",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["overallAssessment"]["esgScore"], 42);
    assert_eq!(body["overallAssessment"]["riskLevel"], "MEDIUM");
    assert_eq!(body["pillarAssessment"]["E"]["score"], 16);
    assert_eq!(body["pillarAssessment"]["E"]["risk"], "HIGH");
    assert_eq!(
        body["pillarAssessment"]["E"]["drivers"],
        serde_json::json!(["emissions", "spill"])
    );
    assert_eq!(body["pillarAssessment"]["S"]["score"], 70);
    assert_eq!(body["pillarAssessment"]["G"]["score"], 41);
    assert_eq!(body["governanceAssessment"]["overallRisk"], "MEDIUM");
    assert_eq!(
        body["governanceAssessment"]["concerns"],
        serde_json::json!(["investigation"])
    );

    let incidents = body["keyIncidents"].as_array().unwrap();
    assert_eq!(incidents.len(), 3);
    assert_eq!(incidents[0]["pillar"], "E");
    assert_eq!(incidents[0]["incident"], "emissions related issue");
    assert_eq!(incidents[0]["severity"], "HIGH");
    assert_eq!(incidents[0]["evidence"], serde_json::json!(["emissions"]));

    assert_eq!(
        body["analystSummary"],
        "Potential ESG risk events detected requiring analyst review."
    );
}

#[tokio::test]
async fn empty_text_is_not_an_error() {
    let response = test_app().oneshot(post_text("")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["overallAssessment"]["esgScore"], 70);
    assert_eq!(body["overallAssessment"]["riskLevel"], "LOW");
    assert_eq!(body["keyIncidents"], serde_json::json!([]));
    assert_eq!(
        body["analystSummary"],
        "No material ESG risk or improvement signals detected."
    );
}

#[tokio::test]
async fn missing_text_is_validation_error() {
    let response = test_app().oneshot(post_analyze("{}")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["details"]["field"], "text");
}

#[tokio::test]
async fn null_text_is_validation_error() {
    let response = test_app()
        .oneshot(post_analyze(r#"{"text": null}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let response = test_app()
        .oneshot(post_analyze(r#"{"text": "unterminated"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn text_limit_from_state_is_applied() {
    let state = AppState::with_rules(RuleSet::builtin(), EngineConfig::new(10).unwrap());
    let app = esg_api::app(state);
    let response = app
        .oneshot(post_text("nothing to see here, then fraud"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["pillarAssessment"]["G"]["score"], 70);
}

// -- Health -------------------------------------------------------------------

#[tokio::test]
async fn health_reports_service_and_rules() {
    let response = test_app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "UP");
    assert_eq!(body["service"], "PulseESG AI Service");
    assert_eq!(body["model"], "stopword-en");
    assert_eq!(body["ruleset"], "builtin");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn counters_track_requests_and_errors() {
    let state = AppState::new();
    let metrics = state.metrics.clone();
    let app = esg_api::app(state);

    app.clone().oneshot(post_text("fraud")).await.unwrap();
    app.clone().oneshot(post_analyze("{}")).await.unwrap();
    app.oneshot(post_analyze("not json")).await.unwrap();

    assert_eq!(metrics.requests(), 3);
    assert_eq!(metrics.errors(), 2);
    assert_eq!(metrics.analyses(), 1);
}

// -- OpenAPI & CORS -----------------------------------------------------------

#[tokio::test]
async fn openapi_document_is_served() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["openapi"].as_str().unwrap().starts_with("3."));
    assert!(body["paths"]["/analyze"]["post"].is_object());
    assert!(body["paths"]["/health"]["get"].is_object());
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/analyze")
                .header("origin", "https://dashboard.example.com")
                .header("access-control-request-method", "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
}
