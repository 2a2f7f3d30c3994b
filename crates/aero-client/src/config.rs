//! API endpoint configuration.

use crate::error::{ClientError, ClientResult};
use std::time::Duration;

/// Base URL of the simulation service.
pub const API_BASE_ENV: &str = "AEROSIM_API_BASE";
/// Optional request timeout in milliseconds. Unset means wait forever.
pub const API_TIMEOUT_ENV: &str = "AEROSIM_API_TIMEOUT_MS";
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL without trailing slash
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Read the process environment once.
    pub fn from_env() -> ClientResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> ClientResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = match non_empty(API_BASE_ENV) {
            Some(base) => Self::new(base),
            None => Self::default(),
        };

        if let Some(raw) = non_empty(API_TIMEOUT_ENV) {
            let ms: u64 = raw.trim().parse().map_err(|_| ClientError::Config {
                what: format!("{API_TIMEOUT_ENV} must be a whole number of milliseconds, got '{raw}'"),
            })?;
            config.timeout = Some(Duration::from_millis(ms));
        }

        Ok(config)
    }

    /// Full URL for an API path such as `/simulate2d`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
