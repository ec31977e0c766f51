//! Rollcall - a person registry HTTP API
//!
//! Rollcall is built on top of Axum and Tokio and demonstrates declarative
//! request validation end to end: JSON bodies, query strings, path
//! parameters, URL-encoded forms, headers, cookies, and multipart file
//! uploads, all validated through `validator` schemas before a handler
//! ever runs.
//!
//! # Features
//!
//! - **HTTP**: Axum-based routing organized into composable route modules
//! - **Validation**: `ValidatedJson`/`ValidatedQuery`/`ValidatedForm`
//!   extractors that reject invalid input with field-level error detail
//! - **Configuration**: environment-driven config with validation at build
//! - **Testing**: Alba-style HTTP testing utilities, no server required
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rollcall::{routes, App, ConfigBuilder};
//!
//! #[tokio::main]
//! async fn main() {
//!     rollcall::init_tracing();
//!
//!     let config = ConfigBuilder::new().from_env().build().unwrap();
//!
//!     let app = App::with_config(config)
//!         .register_module(routes::HomeModule)
//!         .register_module(routes::PersonsModule);
//!
//!     app.serve().await.unwrap();
//! }
//! ```

mod app;
mod config;
mod core;
pub mod domain;
mod error;
pub mod health;
mod http;
mod middleware;
pub mod routes;
pub mod testing;
pub mod utils;
pub mod validation;

// Re-exports for public API
pub use app::{AppContext, AppContextBuilder};
pub use config::{Config, ConfigBuilder, LoggingConfig, ServerConfig};
pub use core::{App, AppBuilder};
pub use error::{ApiError, ErrorResponse, Result};
pub use http::{CreatedResponse, JsonResponse, RouteModule, UploadConfig};
pub use validation::{ValidatedForm, ValidatedJson, ValidatedQuery, validator};

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging with sensible defaults
///
/// This should be called early in your application, typically in main()
/// before creating the App.
///
/// # Environment Variables
///
/// - `RUST_LOG`: Set log level (e.g., "info", "debug", "rollcall=debug")
/// - `ROLLCALL_LOG_JSON`: Set to "true" for JSON formatted logs
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let json_logs = std::env::var("ROLLCALL_LOG_JSON")
        .map(|v| v.parse::<bool>().unwrap_or(false))
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// Initialize tracing with a custom configuration
pub fn init_tracing_with_config(config: &Config) {
    let env_filter = EnvFilter::new(&config.logging.level);

    if config.logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
