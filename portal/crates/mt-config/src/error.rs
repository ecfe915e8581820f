use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// A setting failed validation; `key` is its dotted TOML path
    #[error("Invalid {key}: {message} {location}")]
    Invalid {
        key: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot determine the working directory: {source} {location}")]
    WorkingDir {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("IO error at {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("TOML parse error in {path}: {source} {location}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
        location: ErrorLocation,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn invalid(key: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn working_dir(source: std::io::Error) -> Self {
        Self::WorkingDir {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn io(path: PathBuf, source: std::io::Error) -> Self {
        Self::Io {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn toml(path: PathBuf, source: toml::de::Error) -> Self {
        Self::Toml {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Dotted key of the offending setting, for validation failures.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            Self::Invalid { key, .. } => Some(*key),
            _ => None,
        }
    }
}

pub type ConfigErrorResult<T> = std::result::Result<T, ConfigError>;
