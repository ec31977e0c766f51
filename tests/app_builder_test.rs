//! Tests for App and AppBuilder functionality

use axum::{Json, Router, routing::get};
use rollcall::testing::{get as test_get, post as test_post};
use rollcall::{App, AppContext, ConfigBuilder, RouteModule, UploadConfig};
use serde_json::json;

// A module with a prefix
struct PrefixedModule;

impl RouteModule for PrefixedModule {
    fn routes(&self) -> Router<AppContext> {
        Router::new().route(
            "/hello",
            get(|| async { Json(json!({"message": "hello from prefixed"})) }),
        )
    }

    fn prefix(&self) -> Option<&str> {
        Some("/api/v1")
    }
}

// A module without a prefix
struct UnprefixedModule;

impl RouteModule for UnprefixedModule {
    fn routes(&self) -> Router<AppContext> {
        Router::new().route("/status", get(|| async { Json(json!({"status": "ok"})) }))
    }
}

#[tokio::test]
async fn test_app_builder_respects_module_prefix() {
    let app = App::builder()
        .register_module(PrefixedModule)
        .build()
        .into_test_router();

    // Should be accessible at /api/v1/hello
    test_get(app.clone(), "/api/v1/hello")
        .execute()
        .await
        .assert_ok();

    // Should NOT be accessible at /hello (without prefix)
    test_get(app, "/hello").execute().await.assert_not_found();
}

#[tokio::test]
async fn test_app_builder_merges_unprefixed_modules() {
    let app = App::builder()
        .register_module(UnprefixedModule)
        .build()
        .into_test_router();

    test_get(app, "/status")
        .execute()
        .await
        .assert_ok()
        .assert_json_path("status", json!("ok"))
        .await;
}

#[tokio::test]
async fn test_health_route_is_always_present() {
    let app = App::new().into_test_router();

    test_get(app, "/health")
        .execute()
        .await
        .assert_ok()
        .assert_json_path("service", json!("rollcall"))
        .await;
}

#[tokio::test]
async fn test_request_id_header_is_set() {
    let app = App::new().into_test_router();

    let response = test_get(app, "/health").execute().await.assert_ok();
    let raw = response.response();
    assert!(raw.headers().get("x-request-id").is_some());
}

#[tokio::test]
async fn test_body_limit_rejects_oversized_payloads() {
    let config = ConfigBuilder::new()
        .with_max_body_size(1024)
        .with_upload_config(UploadConfig::with_max_size(512))
        .build()
        .unwrap();

    let app = App::with_config(config)
        .register_module(rollcall::routes::PersonsModule)
        .into_test_router();

    let huge = json!({
        "first_name": "x".repeat(4096),
        "last_name": "Ramírez Arango",
        "age": 23,
        "password": "hunter2hunter2"
    });

    test_post(app, "/person/new")
        .with_json(&huge)
        .execute()
        .await
        .assert_payload_too_large();
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = App::new().into_test_router();

    test_get(app, "/nope").execute().await.assert_not_found();
}
