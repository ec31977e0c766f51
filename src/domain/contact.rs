use serde::{Deserialize, Serialize};
use validator::Validate;

/// Form body of `POST /login`
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(
        length(min = 1, max = 20, message = "must be between 1 and 20 characters"),
        custom = "crate::validation::validate_not_blank"
    )]
    pub username: String,

    #[validate(length(min = 8, message = "must be at least 8 characters"))]
    pub password: String,
}

/// Response of `POST /login`; the password is never echoed
#[derive(Debug, Serialize)]
pub struct LoginOut {
    pub username: String,
    pub message: &'static str,
}

impl LoginOut {
    pub fn for_username(username: String) -> Self {
        Self {
            username,
            message: "Login successful",
        }
    }
}

/// Form body of `POST /contact`
#[derive(Debug, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(
        length(min = 1, max = 20, message = "must be between 1 and 20 characters"),
        custom = "crate::validation::validate_not_blank"
    )]
    pub first_name: String,

    #[validate(
        length(min = 1, max = 20, message = "must be between 1 and 20 characters"),
        custom = "crate::validation::validate_not_blank"
    )]
    pub last_name: String,

    #[validate(email(message = "must be a valid email"))]
    pub email: String,

    #[validate(length(min = 20, message = "must be at least 20 characters"))]
    pub message: String,
}

/// Response of `POST /contact`: the submitted fields plus the captured
/// request metadata
#[derive(Debug, Serialize)]
pub struct ContactReceipt {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ads: Option<String>,
}

/// Response of `POST /post-image`
#[derive(Debug, Serialize)]
pub struct UploadSummary {
    pub filename: String,
    pub content_type: String,
    /// File size in kibibytes, rounded to two decimals
    pub size_kb: f64,
}

impl UploadSummary {
    pub fn new(filename: String, content_type: String, size_bytes: usize) -> Self {
        let size_kb = (size_bytes as f64 / 1024.0 * 100.0).round() / 100.0;
        Self {
            filename,
            content_type,
            size_kb,
        }
    }
}
