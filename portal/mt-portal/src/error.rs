use mt_api::{ClientError, ErrorKind};
use mt_config::ConfigError;
use mt_core::CoreError;
use mt_session::SessionError;

use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortalError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Session cache error: {0}")]
    Session(#[from] SessionError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("{}", .source.inline_message())]
    Validation {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Not signed in: pass --token and --user-id {location}")]
    SignedOut { location: ErrorLocation },

    #[error("Failed to read {path}: {source} {location}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to serialize output: {source} {location}")]
    Output {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl PortalError {
    #[track_caller]
    pub fn signed_out() -> Self {
        Self::SignedOut {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn read_file(path: PathBuf, source: std::io::Error) -> Self {
        Self::ReadFile {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message for stderr; backend and validation messages are shown as-is.
    pub fn user_message(&self) -> String {
        match self {
            Self::Client(e) => match e.kind() {
                ErrorKind::Business | ErrorKind::Validation => e.user_message(),
                ErrorKind::Transport | ErrorKind::Authentication => {
                    format!("{} ({e})", e.user_message())
                }
            },
            Self::Validation { source, .. } => source.inline_message(),
            other => other.to_string(),
        }
    }
}

impl From<CoreError> for PortalError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Validation {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for PortalError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Output {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, PortalError>;
