//! Request validation support
//!
//! This module provides type-safe request validation using the `validator`
//! crate. Schemas declare their constraints with derive attributes and the
//! extractors reject invalid input before the handler runs.
//!
//! # Example
//!
//! ```rust,no_run
//! use rollcall::validation::ValidatedJson;
//! use validator::Validate;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Validate)]
//! struct CreatePersonRequest {
//!     #[validate(length(min = 1, max = 50))]
//!     first_name: String,
//!     #[validate(range(min = 1, max = 115))]
//!     age: u8,
//! }
//!
//! async fn create_person(
//!     ValidatedJson(req): ValidatedJson<CreatePersonRequest>
//! ) -> rollcall::Result<axum::Json<serde_json::Value>> {
//!     // req is guaranteed to be valid
//!     Ok(axum::Json(serde_json::json!({"status": "ok"})))
//! }
//! ```

mod extractor;
mod validators;

pub use extractor::{ValidatedForm, ValidatedJson, ValidatedQuery};
pub use validator;
pub use validators::validate_not_blank;
