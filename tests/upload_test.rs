//! Tests for the multipart upload endpoint

use axum::Router;
use rollcall::routes::UploadsModule;
use rollcall::testing::post;
use rollcall::{App, AppContext, UploadConfig};

fn app() -> Router {
    App::new().register_module(UploadsModule).into_test_router()
}

fn app_with_upload_config(config: UploadConfig) -> Router {
    App::new()
        .with_context(AppContext::with_upload_config(config))
        .register_module(UploadsModule)
        .into_test_router()
}

const FAKE_PNG: &[u8] = b"\x89PNG\r\n\x1a\nfake image bytes";

#[tokio::test]
async fn test_upload_reports_file_metadata() {
    let response = post(app(), "/post-image")
        .with_multipart_file("image", "photo.png", "image/png", FAKE_PNG)
        .execute()
        .await
        .assert_ok();

    let body: serde_json::Value = response.json().await;
    assert_eq!(body["filename"], "photo.png");
    assert_eq!(body["content_type"], "image/png");

    let expected_kb = (FAKE_PNG.len() as f64 / 1024.0 * 100.0).round() / 100.0;
    assert_eq!(body["size_kb"], serde_json::json!(expected_kb));
}

#[tokio::test]
async fn test_upload_rejects_disallowed_mime_type() {
    let response = post(app(), "/post-image")
        .with_multipart_file("image", "notes.txt", "text/plain", b"hello")
        .execute()
        .await
        .assert_bad_request();

    let body: serde_json::Value = response.json().await;
    assert!(body["error"].as_str().unwrap().contains("not allowed"));
}

#[tokio::test]
async fn test_upload_requires_image_field() {
    post(app(), "/post-image")
        .with_multipart_file("document", "photo.png", "image/png", FAKE_PNG)
        .execute()
        .await
        .assert_bad_request();
}

#[tokio::test]
async fn test_upload_rejects_oversized_file() {
    let config = UploadConfig::with_max_size(8).allow_type("image/png");

    let response = post(app_with_upload_config(config), "/post-image")
        .with_multipart_file("image", "photo.png", "image/png", FAKE_PNG)
        .execute()
        .await
        .assert_bad_request();

    let body: serde_json::Value = response.json().await;
    assert!(body["error"].as_str().unwrap().contains("exceeds maximum"));
}

#[tokio::test]
async fn test_upload_enforces_extension_allowlist() {
    let config = UploadConfig::with_max_size(1024)
        .allow_type("image/png")
        .allow_extension("png");

    post(app_with_upload_config(config.clone()), "/post-image")
        .with_multipart_file("image", "photo.png", "image/png", FAKE_PNG)
        .execute()
        .await
        .assert_ok();

    post(app_with_upload_config(config), "/post-image")
        .with_multipart_file("image", "photo.bmp", "image/png", FAKE_PNG)
        .execute()
        .await
        .assert_bad_request();
}

#[tokio::test]
async fn test_upload_without_multipart_body_is_rejected() {
    post(app(), "/post-image")
        .execute()
        .await
        .assert_bad_request();
}
