use std::fmt;
use std::str::FromStr;

use super::var_or;
use crate::error::AppError;

pub const LOG_FORMAT_VAR: &str = "RESOURCE_SERVER_LOG_FORMAT";

/// Output shape of the process-wide log stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Single-line human-readable output for local runs.
    Compact,
}

impl LogFormat {
    pub fn from_env() -> Result<Self, AppError> {
        var_or(LOG_FORMAT_VAR, "json").parse()
    }
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "compact" => Ok(Self::Compact),
            _ => Err(AppError::config(format!(
                "{LOG_FORMAT_VAR} must be 'json' or 'compact', got '{raw}'"
            ))),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Compact => f.write_str("compact"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use serial_test::serial;

    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!(" compact ".parse::<LogFormat>().unwrap(), LogFormat::Compact);
    }

    #[test]
    fn rejects_unknown_format() {
        let err = "pretty".parse::<LogFormat>().unwrap_err();
        assert!(err.to_string().contains(LOG_FORMAT_VAR));
    }

    #[test]
    #[serial]
    fn defaults_to_json_when_unset() {
        env::remove_var(LOG_FORMAT_VAR);
        assert_eq!(LogFormat::from_env().unwrap(), LogFormat::Json);
    }

    #[test]
    #[serial]
    fn reads_format_from_env() {
        env::set_var(LOG_FORMAT_VAR, "compact");
        let format = LogFormat::from_env();
        env::remove_var(LOG_FORMAT_VAR);
        assert_eq!(format.unwrap(), LogFormat::Compact);
    }
}
