//! Integration tests for the scanner HTTP endpoints.
//!
//! These tests drive the full router in-process with a mock gateway:
//! 1. Scans return the expected score, level and readiness
//! 2. Empty input is refused before any model call
//! 3. Gateway failures surface as errors without touching the scan result

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use transformation_assistant::adapters::ai::MockGateway;
use transformation_assistant::adapters::http::{build_router, ScannerAppState};
use transformation_assistant::config::{AppConfig, ServerConfig};
use transformation_assistant::domain::risk::RiskScorer;
use transformation_assistant::ports::GatewayError;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app(gateway: Arc<MockGateway>) -> Router {
    app_with_server(gateway, &ServerConfig::default())
}

fn app_with_server(gateway: Arc<MockGateway>, server: &ServerConfig) -> Router {
    let state = ScannerAppState::new(Arc::new(RiskScorer::default()), gateway, "gpt-4o-mini");
    build_router(state, server)
}

async fn post(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// =============================================================================
// Scan
// =============================================================================

#[tokio::test]
async fn scan_reports_high_risk() {
    let (status, body) = post(
        app(Arc::new(MockGateway::new())),
        "/api/scan",
        json!({ "text": "Team is angry and will refuse the new system. They resist. Too busy." }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["level"], "high");
    assert_eq!(body["score"], 7);
    assert_eq!(body["high_hits"], 3);
    assert_eq!(body["medium_hits"], 1);
    assert_eq!(body["readiness"], 16);
    assert_eq!(body["next_steps"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn scan_counts_overlapping_phrases_separately() {
    let (status, body) = post(
        app(Arc::new(MockGateway::new())),
        "/api/scan",
        json!({ "text": "The rollout was delayed" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], 4);
    assert_eq!(body["level"], "medium");
    assert_eq!(body["readiness"], 52);
}

#[tokio::test]
async fn scan_of_neutral_text_is_low() {
    let (status, body) = post(
        app(Arc::new(MockGateway::new())),
        "/api/scan",
        json!({ "text": "Training went well and people are excited." }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["level"], "low");
    assert_eq!(body["score"], 0);
    assert_eq!(body["readiness"], 100);
    assert!(body["keyword_hits"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn scan_rejects_empty_text() {
    let (status, body) = post(
        app(Arc::new(MockGateway::new())),
        "/api/scan",
        json!({ "text": "   " }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "EMPTY_INPUT");
    assert_eq!(body["message"], "Please paste some notes first");
}

// =============================================================================
// Guidance
// =============================================================================

#[tokio::test]
async fn summary_guidance_returns_model_text() {
    let gateway = Arc::new(MockGateway::new().with_response("1. Hold a listening session"));
    let (status, body) = post(
        app(gateway.clone()),
        "/api/guidance/summary",
        json!({
            "text": "People are worried about the cutover",
            "project": { "name": "Ledger Upgrade", "phase": "pilot" }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kind"], "summary_guidance");
    assert_eq!(body["content"], "1. Hold a listening session");
    assert_eq!(body["model"], "gpt-4o-mini");
    assert_eq!(body["project"], "Project: Ledger Upgrade (System rollout, phase: Pilot)");

    let calls = gateway.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].prompt.user_prompt.contains("Ledger Upgrade"));
    assert!(calls[0].prompt.user_prompt.contains("worried about the cutover"));
}

#[tokio::test]
async fn leadership_script_uses_default_project() {
    let gateway = Arc::new(MockGateway::new().with_response("Team, I hear you."));
    let (status, body) = post(
        app(gateway.clone()),
        "/api/guidance/script",
        json!({ "text": "Staff complain about the timeline" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kind"], "leadership_script");
    assert_eq!(body["content"], "Team, I hear you.");
    assert!(gateway.calls()[0]
        .prompt
        .user_prompt
        .contains("Finance System Rollout"));
}

#[tokio::test]
async fn guidance_refuses_empty_text_without_calling_gateway() {
    let gateway = Arc::new(MockGateway::new());
    let (status, body) = post(
        app(gateway.clone()),
        "/api/guidance/script",
        json!({ "text": "" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "EMPTY_INPUT");
    assert_eq!(gateway.call_count(), 0);
}

#[tokio::test]
async fn gateway_failure_does_not_change_scan_result() {
    let text = "They push back and are overwhelmed";
    let gateway = Arc::new(MockGateway::new().with_error(GatewayError::unavailable("down")));
    let router = app(gateway);

    let (_, before) = post(router.clone(), "/api/scan", json!({ "text": text })).await;

    let (status, error) = post(
        router.clone(),
        "/api/guidance/summary",
        json!({ "text": text }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(error["code"], "GATEWAY_FAILED");
    assert_eq!(error["retryable"], true);

    let (_, after) = post(router, "/api/scan", json!({ "text": text })).await;
    assert_eq!(before, after);
    assert_eq!(after["score"], 3);
}

#[tokio::test]
async fn rate_limited_gateway_maps_to_429() {
    let gateway = Arc::new(MockGateway::new().with_error(GatewayError::rate_limited(15)));
    let (status, body) = post(
        app(gateway),
        "/api/guidance/summary",
        json!({ "text": "resist" }),
    )
    .await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["code"], "RATE_LIMITED");
}

#[tokio::test]
async fn slow_gateway_within_validated_timeouts_completes() {
    let mut config = AppConfig::default();
    config.server.request_timeout_secs = 2;
    config.ai.timeout_secs = 1;
    config.validate().unwrap();

    let gateway = Arc::new(
        MockGateway::new()
            .with_response("Thank the team for raising this.")
            .with_delay(Duration::from_millis(300)),
    );
    let (status, body) = post(
        app_with_server(gateway.clone(), &config.server),
        "/api/guidance/summary",
        json!({ "text": "People are worried" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"], "Thank the team for raising this.");
    assert_eq!(gateway.call_count(), 1);
}

#[tokio::test]
async fn server_timeout_at_or_below_ai_timeout_is_rejected() {
    let mut config = AppConfig::default();
    config.server.request_timeout_secs = 1;
    config.ai.timeout_secs = 300;

    assert!(config.validate().is_err());
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_is_ok() {
    let response = app(Arc::new(MockGateway::new()))
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
