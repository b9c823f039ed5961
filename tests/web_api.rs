// HTTP surface tests: the router driven in-process with tower's oneshot.

mod common;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use common::{analyzer, clean, flagged, CallLog};
use ugc_analyzer::moderation::traits::ModerationResult;
use ugc_analyzer::web::{build_router, AppState};

fn app(moderation: Option<ModerationResult>, insights: Option<&str>) -> (Router, CallLog) {
    let (analyzer, calls) = analyzer(moderation, insights);
    (build_router(AppState { analyzer }), calls)
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), 64 * 1024).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn analyze_returns_combined_verdict() {
    let (app, _calls) = app(
        Some(clean(r#"{"spam": 0.2}"#)),
        Some("Looks promotional, moderate engagement potential."),
    );

    let (status, json) = send(
        app,
        post_json("/analyze", r#"{"text": "Buy now, limited offer!!!"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!({
            "flagged": false,
            "categories": { "spam": 0.2 },
            "insights": "Looks promotional, moderate engagement potential."
        })
    );
}

#[tokio::test]
async fn provider_failure_is_still_http_200() {
    let (app, _calls) = app(None, Some("unused"));

    let (status, json) = send(app, post_json("/analyze", r#"{"text": "hello"}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!({ "error": "moderation service unavailable" }));
}

#[tokio::test]
async fn flagged_content_still_gets_insights() {
    let (app, calls) = app(Some(flagged(r#"{"hate": true}"#)), Some("Hostile."));

    let (status, json) = send(app, post_json("/analyze", r#"{"text": "ugh"}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["flagged"], true);
    assert_eq!(json["insights"], "Hostile.");
    assert_eq!(calls.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn missing_text_field_is_rejected_without_calling_providers() {
    let (app, calls) = app(Some(clean("{}")), Some("unused"));

    let (status, json) = send(app, post_json("/analyze", r#"{"body": "hello"}"#)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["error"].is_string());
    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn non_string_text_is_rejected() {
    let (app, calls) = app(Some(clean("{}")), Some("unused"));

    let (status, json) = send(app, post_json("/analyze", r#"{"text": 42}"#)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["error"].is_string());
    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn invalid_json_is_bad_request() {
    let (app, _calls) = app(Some(clean("{}")), Some("unused"));

    let (status, json) = send(app, post_json("/analyze", "{not json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn missing_content_type_is_unsupported_media_type() {
    let (app, _calls) = app(Some(clean("{}")), Some("unused"));

    let request = Request::builder()
        .method(Method::POST)
        .uri("/analyze")
        .body(Body::from(r#"{"text": "hello"}"#))
        .unwrap();
    let (status, json) = send(app, request).await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn get_on_analyze_is_method_not_allowed() {
    let (app, _calls) = app(Some(clean("{}")), Some("unused"));

    let request = Request::builder()
        .method(Method::GET)
        .uri("/analyze")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn health_reports_ok() {
    let (app, _calls) = app(None, None);

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn cors_preflight_is_allowed_from_any_origin() {
    let (app, _calls) = app(None, None);

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/analyze")
        .header(header::ORIGIN, "https://dashboard.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
