//! Connection settings for the Authlete API.

use std::fmt;
use std::time::Duration;

use super::{must_var, var_or};
use crate::error::AppError;

pub const BASE_URL_VAR: &str = "AUTHLETE_BASE_URL";
pub const API_KEY_VAR: &str = "AUTHLETE_SERVICE_APIKEY";
pub const API_SECRET_VAR: &str = "AUTHLETE_SERVICE_APISECRET";
pub const TIMEOUT_VAR: &str = "AUTHLETE_TIMEOUT_SECS";

pub const DEFAULT_BASE_URL: &str = "https://api.authlete.com";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, PartialEq, Eq)]
pub struct AuthleteConfig {
    pub base_url: String,
    pub api_key: String,
    pub api_secret: String,
    pub timeout: Duration,
}

impl AuthleteConfig {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_env() -> Result<Self, AppError> {
        let base_url = var_or(BASE_URL_VAR, DEFAULT_BASE_URL);
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(AppError::config(format!(
                "{BASE_URL_VAR} must be an http(s) URL, got '{base_url}'"
            )));
        }

        let raw_timeout = var_or(TIMEOUT_VAR, &DEFAULT_TIMEOUT_SECS.to_string());
        let timeout_secs = raw_timeout
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or_else(|| {
                AppError::config(format!(
                    "{TIMEOUT_VAR} must be a positive number of seconds, got '{raw_timeout}'"
                ))
            })?;

        Ok(Self::new(base_url, must_var(API_KEY_VAR)?, must_var(API_SECRET_VAR)?)
            .with_timeout(Duration::from_secs(timeout_secs)))
    }

    /// `base_url` joined with an API path, without doubling the slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl fmt::Debug for AuthleteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthleteConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}
