use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Legacy placeholder strings the backend has stored for users who never
/// picked a role.
const PLACEHOLDER_ROLES: [&str; 3] = ["unset", "user", ""];

/// Role of a portal user, governs navigation and page access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    /// No role chosen yet
    #[default]
    Unset,
    Patient,
    Doctor,
    Admin,
}

impl Role {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unset => "unset",
            Self::Patient => "patient",
            Self::Doctor => "doctor",
            Self::Admin => "admin",
        }
    }

    /// Lenient decoding of a backend-supplied role.
    ///
    /// Placeholders and anything unrecognised map to `Unset`, so a stale or
    /// malformed role can never unlock a page.
    pub fn from_wire(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("patient") => Self::Patient,
            Some("doctor") => Self::Doctor,
            Some("admin") => Self::Admin,
            _ => Self::Unset,
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }

    /// Roles a user may pick for themselves on the role-selection page
    pub fn is_selectable(&self) -> bool {
        matches!(self, Self::Patient | Self::Doctor)
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "patient" => Ok(Self::Patient),
            "doctor" => Ok(Self::Doctor),
            "admin" => Ok(Self::Admin),
            s if PLACEHOLDER_ROLES.contains(&s) => Ok(Self::Unset),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(Role::from_wire(value.as_deref()))
    }
}
