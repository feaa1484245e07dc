//! Gateway configuration loaded from environment.

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:9000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub(crate) fn env_string(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_owned())
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

/// Backend address and request timeout, read once at startup.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl GatewayConfig {
    /// Build a config for the given base address with the default timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS) }
    }

    /// Load from `MEDUSA_BACKEND_URL` and `MEDUSA_REQUEST_TIMEOUT_SECS`.
    /// Missing variables fall back to `http://localhost:9000` and 10 seconds.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base_url: env_string("MEDUSA_BACKEND_URL", DEFAULT_BASE_URL),
            timeout: Duration::from_secs(env_parse("MEDUSA_REQUEST_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
