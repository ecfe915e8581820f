use mt_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Error categories the UI reacts to differently
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network unreachable, timeout, or an unusable response
    Transport,
    /// Missing or rejected credential
    Authentication,
    /// Input rejected client-side before any request was sent
    Validation,
    /// Error reported by the backend, shown verbatim
    Business,
}

/// Errors that can occur during API calls
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Authentication failed ({status}): {message} {location}")]
    Unauthorized {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("API error ({status}): {message} {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid input: {source} {location}")]
    Validation {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        ClientError::Api {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthorized(status: u16, message: impl Into<String>) -> Self {
        ClientError::Unauthorized {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Http { .. } | Self::Json { .. } => ErrorKind::Transport,
            Self::Unauthorized { .. } => ErrorKind::Authentication,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Api { .. } => ErrorKind::Business,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http { source, .. } if source.is_timeout())
    }

    /// Text for a dismissible message; server messages pass through verbatim.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::Validation { source, .. } => source.inline_message(),
            Self::Unauthorized { .. } => "Please sign in again to continue.".to_string(),
            Self::Http { .. } if self.is_timeout() => {
                "The server took too long to respond. Please try again.".to_string()
            }
            Self::Http { .. } | Self::Json { .. } => {
                "Could not reach the server. Please try again.".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

impl From<CoreError> for ClientError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        ClientError::Validation {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
