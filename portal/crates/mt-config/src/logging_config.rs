use crate::{ConfigError, ConfigErrorResult, DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_LEVEL, LogLevel};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Colored stderr output (ignored when logging to a file)
    pub colored: bool,
    /// Directory for log files, relative to the config directory
    pub dir: String,
    /// Log file name; None logs to stderr
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            colored: true,
            dir: String::from(DEFAULT_LOG_DIRECTORY),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Where console logs end up: the log file name, or `stderr`.
    pub fn destination(&self) -> &str {
        self.file.as_deref().unwrap_or("stderr")
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(ref file) = self.file
            && (file.trim().is_empty() || file.contains('/') || file.contains('\\'))
        {
            return Err(ConfigError::invalid(
                "logging.file",
                format!("must be a plain file name, got '{file}'"),
            ));
        }
        Ok(())
    }
}
