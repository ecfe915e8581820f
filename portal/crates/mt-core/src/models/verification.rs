use crate::models::intake::{parse_in_range, required};
use crate::models::visa_status::VisaStatus;
use crate::{CoreError, Result as CoreErrorResult};

use serde::Serialize;

pub const MAX_VERIFICATION_AGE: u32 = 120;
pub const MAX_AVAILABILITY_DAYS: u32 = 365;

/// Raw input of the profile verification form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VerificationForm {
    pub name: String,
    pub age: String,
    /// Free text, e.g. "$5000 USD"
    pub budget: String,
    pub availability_days: String,
    pub visa_status: VisaStatus,
}

/// Payload sent to `/api/user/verify`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequest {
    pub name: String,
    pub age: u32,
    pub budget: String,
    pub availability_days: u32,
    pub visa_status: VisaStatus,
}

impl VerificationForm {
    /// Start from the display name the identity provider knows, if any.
    pub fn prefilled(name: Option<&str>) -> Self {
        Self {
            name: name.unwrap_or_default().to_string(),
            ..Self::default()
        }
    }

    pub fn to_request(&self) -> CoreErrorResult<VerificationRequest> {
        if [&self.name, &self.age, &self.budget, &self.availability_days]
            .iter()
            .any(|v| v.trim().is_empty())
        {
            return Err(CoreError::validation("form", "Please fill in all fields."));
        }

        Ok(VerificationRequest {
            name: required("name", "Name", &self.name)?,
            age: parse_in_range("age", "Age", &self.age, 1, MAX_VERIFICATION_AGE)?,
            budget: required("budget", "Budget", &self.budget)?,
            availability_days: parse_in_range(
                "availabilityDays",
                "Available days",
                &self.availability_days,
                1,
                MAX_AVAILABILITY_DAYS,
            )?,
            visa_status: self.visa_status,
        })
    }
}
