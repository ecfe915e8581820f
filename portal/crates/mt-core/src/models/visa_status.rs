use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VisaStatus {
    #[default]
    IndianCitizen,
    NotIndianCitizen,
    Other,
}

impl VisaStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IndianCitizen => "indian_citizen",
            Self::NotIndianCitizen => "not_indian_citizen",
            Self::Other => "other",
        }
    }
}

impl FromStr for VisaStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "indian_citizen" => Ok(Self::IndianCitizen),
            "not_indian_citizen" => Ok(Self::NotIndianCitizen),
            "other" => Ok(Self::Other),
            _ => Err(CoreError::InvalidVisaStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for VisaStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
