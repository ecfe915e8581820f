use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_API_BASE_URL, DEFAULT_INTAKE_BASE_URL,
    DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS, MIN_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Where the backend services live and how long to wait for them
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// User, role, verification and visit service
    pub base_url: String,
    /// Intake form service
    pub intake_base_url: String,
    /// Bound on every backend call
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_API_BASE_URL),
            intake_base_url: String::from(DEFAULT_INTAKE_BASE_URL),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (key, url) in [
            ("api.base_url", &self.base_url),
            ("api.intake_base_url", &self.intake_base_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::invalid(
                    key,
                    format!("must start with http:// or https://, got '{url}'"),
                ));
            }
        }

        if self.timeout_secs < MIN_TIMEOUT_SECS || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::invalid(
                "api.timeout_secs",
                format!(
                    "must be {MIN_TIMEOUT_SECS}-{MAX_TIMEOUT_SECS}, got {}",
                    self.timeout_secs
                ),
            ));
        }

        Ok(())
    }
}
