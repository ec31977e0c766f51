//! Tests for the form-encoded endpoints: /login and /contact

use axum::Router;
use rollcall::App;
use rollcall::routes::{AuthModule, ContactModule};
use rollcall::testing::post;
use serde_json::json;

fn app() -> Router {
    App::new()
        .register_module(AuthModule)
        .register_module(ContactModule)
        .into_test_router()
}

#[tokio::test]
async fn test_login_echoes_username_with_fixed_message() {
    let response = post(app(), "/login")
        .with_form(&[("username", "stiven"), ("password", "hunter2hunter2")])
        .execute()
        .await
        .assert_ok();

    let body: serde_json::Value = response.json().await;
    assert_eq!(body["username"], "stiven");
    assert_eq!(body["message"], "Login successful");
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_login_rejects_short_password() {
    let response = post(app(), "/login")
        .with_form(&[("username", "stiven"), ("password", "short")])
        .execute()
        .await
        .assert_bad_request();

    let body: serde_json::Value = response.json().await;
    assert!(body["field_errors"].get("password").is_some());
}

#[tokio::test]
async fn test_login_rejects_overlong_username() {
    let username = "a".repeat(21);
    post(app(), "/login")
        .with_form(&[("username", username.as_str()), ("password", "hunter2hunter2")])
        .execute()
        .await
        .assert_bad_request();
}

#[tokio::test]
async fn test_login_requires_form_fields() {
    post(app(), "/login")
        .with_form(&[("username", "stiven")])
        .execute()
        .await
        .assert_bad_request();
}

fn valid_contact_form() -> Vec<(&'static str, &'static str)> {
    vec![
        ("first_name", "Stiven"),
        ("last_name", "Ramírez"),
        ("email", "stiven@example.com"),
        ("message", "This message is definitely long enough."),
    ]
}

#[tokio::test]
async fn test_contact_captures_header_and_cookie() {
    let response = post(app(), "/contact")
        .header("user-agent", "integration-test/1.0")
        .with_cookie("session", "abc")
        .with_cookie("ads", "tracker-42")
        .with_form(&valid_contact_form())
        .execute()
        .await
        .assert_ok();

    let body: serde_json::Value = response.json().await;
    assert_eq!(body["first_name"], "Stiven");
    assert_eq!(body["email"], "stiven@example.com");
    assert_eq!(body["user_agent"], "integration-test/1.0");
    assert_eq!(body["ads"], "tracker-42");
}

#[tokio::test]
async fn test_contact_without_cookie_omits_ads() {
    let response = post(app(), "/contact")
        .header("user-agent", "integration-test/1.0")
        .with_form(&valid_contact_form())
        .execute()
        .await
        .assert_ok();

    let body: serde_json::Value = response.json().await;
    assert!(body.get("ads").is_none());
}

#[tokio::test]
async fn test_contact_rejects_invalid_email() {
    let mut form = valid_contact_form();
    form[2] = ("email", "not-an-email");

    let response = post(app(), "/contact")
        .with_form(&form)
        .execute()
        .await
        .assert_bad_request();

    let body: serde_json::Value = response.json().await;
    assert_eq!(
        body["field_errors"]["email"],
        json!(["must be a valid email"])
    );
}

#[tokio::test]
async fn test_contact_rejects_short_message() {
    let mut form = valid_contact_form();
    form[3] = ("message", "too short");

    let response = post(app(), "/contact")
        .with_form(&form)
        .execute()
        .await
        .assert_bad_request();

    let body: serde_json::Value = response.json().await;
    assert!(body["field_errors"].get("message").is_some());
}
