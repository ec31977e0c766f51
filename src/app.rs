use std::sync::Arc;

use crate::http::UploadConfig;

/// Application context for dependency injection and shared state
///
/// Handlers access this via `State<AppContext>`. The context is cheap to
/// clone; shared pieces live behind `Arc`.
#[derive(Clone)]
pub struct AppContext {
    /// Limits applied to multipart file uploads
    pub upload: Arc<UploadConfig>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            upload: Arc::new(UploadConfig::default()),
        }
    }

    /// Builder pattern for constructing AppContext
    pub fn builder() -> AppContextBuilder {
        AppContextBuilder::new()
    }

    pub fn with_upload_config(config: UploadConfig) -> Self {
        Self {
            upload: Arc::new(config),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for AppContext
#[must_use = "builder does nothing until you call build()"]
pub struct AppContextBuilder {
    upload: UploadConfig,
}

impl AppContextBuilder {
    pub fn new() -> Self {
        Self {
            upload: UploadConfig::default(),
        }
    }

    pub fn with_upload_config(mut self, config: UploadConfig) -> Self {
        self.upload = config;
        self
    }

    pub fn build(self) -> AppContext {
        AppContext {
            upload: Arc::new(self.upload),
        }
    }
}

impl Default for AppContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
