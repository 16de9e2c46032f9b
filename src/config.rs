//! API Configuration
//!
//! The item store location is baked in at build time through
//! `ITEM_API_BASE_URL` (default `/api`).

use reqwest::Url;
use thiserror::Error;

/// Base used when `ITEM_API_BASE_URL` is not set at build time
pub const DEFAULT_BASE_URL: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid item store base URL '{base}': {reason}")]
    InvalidBaseUrl { base: String, reason: String },
}

impl ConfigError {
    /// Text for the page shown in place of the app
    pub fn user_message(&self) -> String {
        format!("The item manager cannot start: {}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Absolute URL or path prefix such as `/api`
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_env() -> Self {
        match option_env!("ITEM_API_BASE_URL") {
            Some(base) if !base.trim().is_empty() => Self::new(base.trim()),
            _ => Self::default(),
        }
    }

    /// Absolute base URL without a trailing slash
    ///
    /// A relative base is joined onto `origin` (the page origin in a browser).
    pub fn resolve(&self, origin: Option<&str>) -> Result<String, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            base: self.base_url.clone(),
            reason,
        };

        let url = match Url::parse(&self.base_url) {
            Ok(url) => url,
            Err(_) if self.base_url.starts_with('/') => {
                let origin = origin.ok_or_else(|| invalid("relative base needs a page origin".to_string()))?;
                let origin = Url::parse(origin).map_err(|e| invalid(e.to_string()))?;
                origin.join(&self.base_url).map_err(|e| invalid(e.to_string()))?
            }
            Err(e) => return Err(invalid(e.to_string())),
        };

        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(invalid("expected an http(s) URL".to_string()));
        }

        Ok(url.as_str().trim_end_matches('/').to_string())
    }
}

/// Origin of the current page, when running in a browser
pub fn page_origin() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|w| w.location().origin().ok())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}
