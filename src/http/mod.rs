//! HTTP request/response types and route plumbing.
//!
//! Provides standardized response wrappers, upload limits, and the
//! RouteModule trait for organizing routes.

pub mod response;
pub mod routes;
pub mod upload;

pub use response::{CreatedResponse, JsonResponse};
pub use routes::RouteModule;
pub use upload::UploadConfig;
