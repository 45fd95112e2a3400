//! Startup configuration, read from the process environment.

pub mod authlete;
pub mod logging;
pub mod server;

pub use authlete::AuthleteConfig;
pub use logging::LogFormat;
pub use server::ServerConfig;

use std::env;

use crate::error::AppError;

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::config(format!(
            "Required environment variable '{name}' is not set"
        ))),
    }
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
