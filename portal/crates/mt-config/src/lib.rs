mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod session_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;

const DEFAULT_API_BASE_URL: &str = "http://localhost:5001";
const DEFAULT_INTAKE_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 120;
const DEFAULT_CACHE_FILE: &str = "session.json";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const CONFIG_DIR_ENV: &str = "MT_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".mt";
const CONFIG_FILE_NAME: &str = "config.toml";
