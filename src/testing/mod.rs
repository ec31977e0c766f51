//! Testing utilities for rollcall applications
//!
//! Provides Alba-style HTTP endpoint testing without running a server:
//! build a request fluently, fire it through the router with `oneshot`,
//! and assert on the response.
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::{Router, routing, Json};
//! use rollcall::testing;
//! use serde_json::json;
//!
//! async fn hello() -> Json<serde_json::Value> {
//!     Json(json!({"message": "Hello!"}))
//! }
//!
//! #[tokio::test]
//! async fn test_hello() {
//!     let app = Router::new().route("/hello", routing::get(hello));
//!
//!     testing::get(app, "/hello")
//!         .execute()
//!         .await
//!         .assert_ok()
//!         .assert_json();
//! }
//! ```

mod scenario;

pub use scenario::{Scenario, ScenarioAssert, delete, get, patch, post, put};
