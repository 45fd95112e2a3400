use super::var_or;
use crate::error::AppError;

pub const HOST_VAR: &str = "RESOURCE_SERVER_HOST";
pub const PORT_VAR: &str = "RESOURCE_SERVER_PORT";

/// Where the HTTP server binds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let host = var_or(HOST_VAR, "0.0.0.0");
        let raw_port = var_or(PORT_VAR, "8080");
        let port = raw_port.trim().parse::<u16>().map_err(|_| {
            AppError::config(format!("{PORT_VAR} must be a valid port number, got '{raw_port}'"))
        })?;

        Ok(Self { host, port })
    }
}
