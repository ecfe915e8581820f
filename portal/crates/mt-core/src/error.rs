use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error on {field}: {message} {location}")]
    Validation {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Too many files: at most {max} documents per visit {location}")]
    TooManyFiles { max: usize, location: ErrorLocation },

    #[error("Invalid role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid document type: {value} {location}")]
    InvalidDocumentType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid visa status: {value} {location}")]
    InvalidVisaStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid sightseeing preference: {value} {location}")]
    InvalidSightseeingPref {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error for a form field
    #[track_caller]
    pub fn validation<S: Into<String>>(field: &'static str, message: S) -> Self {
        CoreError::Validation {
            field,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn too_many_files(max: usize) -> Self {
        CoreError::TooManyFiles {
            max,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The form field this error should be rendered next to, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(*field),
            Self::TooManyFiles { .. } => Some("medicalDocs"),
            _ => None,
        }
    }

    /// Message suitable for inline display, without the source location.
    pub fn inline_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::TooManyFiles { max, .. } => {
                format!("You can upload a maximum of {max} files.")
            }
            Self::InvalidRole { value, .. } => format!("Unknown role '{value}'"),
            Self::InvalidDocumentType { value, .. } => {
                format!("Unknown document type '{value}'")
            }
            Self::InvalidVisaStatus { value, .. } => format!("Unknown visa status '{value}'"),
            Self::InvalidSightseeingPref { value, .. } => {
                format!("Unknown sightseeing preference '{value}'")
            }
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
