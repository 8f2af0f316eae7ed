//! Client configuration.
//!
//! | Variable                     | Required | Default | Description                       |
//! |------------------------------|----------|---------|-----------------------------------|
//! | `TRIPDESK_API_URL`           | yes      | --      | Base URL of the admin REST API    |
//! | `TRIPDESK_API_TOKEN`         | no       | --      | Initial bearer token              |
//! | `TRIPDESK_HTTP_TIMEOUT_SECS` | no       | `30`    | Per-request timeout               |

use std::time::Duration;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without a trailing slash.
    pub api_url: String,
    pub token: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),
    #[error("{name} must be {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: normalize_url(api_url.into()),
            token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup` (the environment, a test map, ...).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = lookup("TRIPDESK_API_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("TRIPDESK_API_URL"))?;

        let timeout_secs = match lookup("TRIPDESK_HTTP_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                name: "TRIPDESK_HTTP_TIMEOUT_SECS",
                expected: "a whole number of seconds",
                value: raw.clone(),
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_url: normalize_url(api_url),
            token: lookup("TRIPDESK_API_TOKEN").filter(|t| !t.is_empty()),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn normalize_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}
