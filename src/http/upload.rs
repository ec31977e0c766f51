//! File upload limits
//!
//! Constraints applied to multipart file uploads before a handler
//! accepts the file.

use serde::{Deserialize, Serialize};

use crate::utils::get_env_with_prefix;

/// File upload configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Maximum file size in bytes
    #[serde(default = "default_max_size")]
    pub max_size: usize,

    /// Allowed MIME types; empty means any type is accepted
    #[serde(default = "default_allowed_types")]
    pub allowed_types: Vec<String>,

    /// Allowed file extensions; empty means any extension is accepted
    #[serde(default)]
    pub allowed_extensions: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_size: default_max_size(),
            allowed_types: default_allowed_types(),
            allowed_extensions: vec![],
        }
    }
}

fn default_max_size() -> usize {
    5 * 1024 * 1024 // 5MB default
}

fn default_allowed_types() -> Vec<String> {
    vec![
        "image/png".to_string(),
        "image/jpeg".to_string(),
        "image/gif".to_string(),
        "image/webp".to_string(),
    ]
}

impl UploadConfig {
    /// Create a new upload config with a size limit and no type restrictions
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            max_size,
            allowed_types: vec![],
            allowed_extensions: vec![],
        }
    }

    /// Add allowed MIME type
    pub fn allow_type(mut self, mime_type: impl Into<String>) -> Self {
        self.allowed_types.push(mime_type.into());
        self
    }

    /// Add allowed file extension
    pub fn allow_extension(mut self, ext: impl Into<String>) -> Self {
        self.allowed_extensions.push(ext.into());
        self
    }

    /// Load upload configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(max_size) = get_env_with_prefix("UPLOAD_MAX_SIZE") {
            if let Ok(size) = max_size.parse() {
                config.max_size = size;
            }
        }
        if let Some(types) = get_env_with_prefix("UPLOAD_ALLOWED_TYPES") {
            config.allowed_types = types
                .split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect();
        }

        config
    }

    /// Validate file size
    pub fn validate_size(&self, size: usize) -> Result<(), String> {
        if size > self.max_size {
            return Err(format!(
                "File size {} exceeds maximum {}",
                size, self.max_size
            ));
        }
        Ok(())
    }

    /// Validate MIME type
    pub fn validate_type(&self, mime_type: &str) -> Result<(), String> {
        if !self.allowed_types.is_empty() && !self.allowed_types.iter().any(|t| t == mime_type) {
            return Err(format!("MIME type {} not allowed", mime_type));
        }
        Ok(())
    }

    /// Validate file extension
    pub fn validate_extension(&self, filename: &str) -> Result<(), String> {
        if !self.allowed_extensions.is_empty() {
            if let Some(ext) = filename.rsplit('.').next().filter(|e| *e != filename) {
                if !self.allowed_extensions.contains(&ext.to_lowercase()) {
                    return Err(format!("File extension .{} not allowed", ext));
                }
            } else {
                return Err("File has no extension".to_string());
            }
        }
        Ok(())
    }

    /// Run every check against one uploaded file
    pub fn check(&self, filename: &str, mime_type: &str, size: usize) -> Result<(), String> {
        self.validate_size(size)?;
        self.validate_type(mime_type)?;
        self.validate_extension(filename)
    }
}
