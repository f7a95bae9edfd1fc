//! Tests for the diagnostic endpoints and CORS behaviour

mod common;

use actix_web::{http::header, http::Method, http::StatusCode, test};
use serde_json::json;

use pl_api::create_app;
use pl_shared::config::AppConfig;

#[actix_web::test]
async fn test_email_requires_address() {
    let app = test::init_service(create_app(common::fixture(&[]).state)).await;

    let req = test::TestRequest::post()
        .uri("/internal/test-email")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(json, json!({"message": "email required"}));
}

#[actix_web::test]
async fn test_email_without_body() {
    let app = test::init_service(create_app(common::fixture(&[]).state)).await;

    let req = test::TestRequest::post().uri("/internal/test-email").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_email_from_body_creates_no_entry() {
    let fixture = common::fixture(&[]);
    let app = test::init_service(create_app(fixture.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/internal/test-email")
        .set_json(json!({"email": "ops@example.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let json: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(json["message"], "Test email queued/sent");
    assert_eq!(json["provider"], "mock");

    assert_eq!(fixture.provider.get_message_count(), 1);
    assert!(fixture.store.is_empty().await);
}

#[actix_web::test]
async fn test_email_from_query() {
    let fixture = common::fixture(&[]);
    let app = test::init_service(create_app(fixture.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/internal/test-email?email=ops%40example.com")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(fixture.provider.get_message_count(), 1);
}

#[actix_web::test]
async fn test_email_failure_is_500_with_detail() {
    let fixture = common::fixture(&[]);
    fixture.provider.set_simulate_failure(true);
    let app = test::init_service(create_app(fixture.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/internal/test-email")
        .set_json(json!({"email": "ops@example.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(json["message"], "Test email send failed");
    assert!(json["error"].as_str().unwrap().contains("Simulated"));
}

#[actix_web::test]
async fn test_ping_reports_configuration() {
    let app = test::init_service(create_app(common::fixture(&[]).state)).await;

    let req = test::TestRequest::get()
        .uri("/internal/ping")
        .insert_header((header::ORIGIN, "http://localhost:5173"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let json: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(json["ok"], true);
    assert_eq!(json["origin_received"], "http://localhost:5173");
    assert_eq!(json["allow_all"], false);
    assert_eq!(json["allowed_origins"], json!(["http://localhost:5173"]));
    assert_eq!(json["email_providers"], json!(["mock"]));
    assert_eq!(json["otp_ttl_seconds"], 600);
    assert_eq!(json["otp_max_attempts"], 5);
}

#[actix_web::test]
async fn test_cors_preflight_from_allowed_origin() {
    let app = test::init_service(create_app(common::fixture(&[]).state)).await;

    let req = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/api/auth/request-otp")
        .insert_header((header::ORIGIN, "http://localhost:5173"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let headers = resp.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:5173"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
}

#[actix_web::test]
async fn test_cors_rejects_unknown_origin() {
    let app = test::init_service(create_app(common::fixture(&[]).state)).await;

    let req = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/api/auth/request-otp")
        .insert_header((header::ORIGIN, "https://evil.example"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[actix_web::test]
async fn test_cors_allow_all() {
    let mut config = AppConfig::default();
    config.cors.allow_all = true;
    let app = test::init_service(create_app(common::fixture_with(config, &[], vec![]).state)).await;

    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header((header::ORIGIN, "https://anywhere.example"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "https://anywhere.example"
    );
}
