use crate::{ConfigError, ConfigErrorResult, DEFAULT_CACHE_FILE};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Advisory role cache, relative to the config directory
    pub cache_file: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cache_file: String::from(DEFAULT_CACHE_FILE),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let path = Path::new(&self.cache_file);
        if self.cache_file.is_empty() || path.is_absolute() || self.cache_file.contains("..") {
            return Err(ConfigError::invalid(
                "session.cache_file",
                "must be relative and cannot contain '..'",
            ));
        }
        Ok(())
    }
}
