use crate::{
    ApiConfig, CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    LoggingConfig, SessionConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for MT_CONFIG_DIR env var, else use ./.mt/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply MT_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir)
                .map_err(|e| ConfigError::io(config_dir.clone(), e))?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::io(path.to_path_buf(), e))?;

        toml::from_str(&contents).map_err(|e| ConfigError::toml(path.to_path_buf(), e))
    }

    /// Get the config directory.
    /// Priority: MT_CONFIG_DIR env var > ./.mt/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir().map_err(|e| ConfigError::working_dir(e))?;
        Ok(cwd.join(CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.session.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Absolute path of the session cache file.
    pub fn cache_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.session.cache_file))
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref file) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(file),
            )),
            None => Ok(None),
        }
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  api: {} (intake {}), timeout={}s",
            self.api.base_url, self.api.intake_base_url, self.api.timeout_secs
        );
        info!("  session: cache={}", self.session.cache_file);
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.destination()
        );
    }

    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_string("MT_API_BASE_URL", &mut self.api.base_url);
        Self::apply_env_string("MT_API_INTAKE_BASE_URL", &mut self.api.intake_base_url);
        Self::apply_env_parse("MT_API_TIMEOUT_SECS", &mut self.api.timeout_secs);

        // Session
        Self::apply_env_string("MT_SESSION_CACHE_FILE", &mut self.session.cache_file);

        // Logging
        Self::apply_env_parse("MT_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("MT_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("MT_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
