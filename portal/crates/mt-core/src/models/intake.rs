use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

pub const MIN_AGE: u32 = 1;
pub const MAX_AGE: u32 = 120;
pub const MIN_SIGHTSEEING_DAYS: u32 = 1;
pub const MAX_SIGHTSEEING_DAYS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sightseeing {
    Yes,
    #[default]
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SightseeingPref {
    Temples,
    Historical,
    Nature,
    Beaches,
    Shopping,
    Museums,
}

impl SightseeingPref {
    pub const ALL: [SightseeingPref; 6] = [
        Self::Temples,
        Self::Historical,
        Self::Nature,
        Self::Beaches,
        Self::Shopping,
        Self::Museums,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Temples => "temples",
            Self::Historical => "historical",
            Self::Nature => "nature",
            Self::Beaches => "beaches",
            Self::Shopping => "shopping",
            Self::Museums => "museums",
        }
    }
}

impl FromStr for SightseeingPref {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        Self::ALL
            .into_iter()
            .find(|pref| pref.as_str() == s)
            .ok_or_else(|| CoreError::InvalidSightseeingPref {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

/// Intake record as stored by the intake service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntakeRecord {
    pub full_name: Option<String>,
    pub age: Option<u32>,
    pub phone: Option<String>,
    pub country: Option<String>,
    pub budget: Option<f64>,
    pub has_sightseeing: Option<Sightseeing>,
    pub sightseeing_days: Option<u32>,
    pub sightseeing_prefs: Vec<String>,
    pub notes: Option<String>,
    #[serde(rename = "pseudonym_id")]
    pub pseudonym_id: Option<String>,
}

/// Raw intake form input. Fields hold what the user typed so a failed
/// submission never loses input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntakeForm {
    pub full_name: String,
    pub age: String,
    pub phone: String,
    pub country: String,
    pub budget: String,
    pub has_sightseeing: Sightseeing,
    pub sightseeing_days: String,
    pub sightseeing_prefs: Vec<SightseeingPref>,
    pub notes: String,
}

/// Payload sent to `/intake/submit`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeSubmission {
    pub full_name: String,
    pub age: u32,
    pub phone: String,
    pub country: String,
    pub budget: f64,
    pub has_sightseeing: Sightseeing,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sightseeing_days: Option<u32>,
    pub sightseeing_prefs: Vec<SightseeingPref>,
    pub notes: Option<String>,
    #[serde(rename = "pseudonym_id")]
    pub pseudonym_id: String,
}

impl IntakeForm {
    /// Prefill the form from a stored record (edit mode).
    ///
    /// Preferences the form does not offer are dropped.
    pub fn from_record(record: &IntakeRecord) -> Self {
        Self {
            full_name: record.full_name.clone().unwrap_or_default(),
            age: record.age.map(|a| a.to_string()).unwrap_or_default(),
            phone: record.phone.clone().unwrap_or_default(),
            country: record.country.clone().unwrap_or_default(),
            budget: record.budget.map(|b| b.to_string()).unwrap_or_default(),
            has_sightseeing: record.has_sightseeing.unwrap_or_default(),
            sightseeing_days: record
                .sightseeing_days
                .map(|d| d.to_string())
                .unwrap_or_default(),
            sightseeing_prefs: record
                .sightseeing_prefs
                .iter()
                .filter_map(|p| p.parse().ok())
                .collect(),
            notes: record.notes.clone().unwrap_or_default(),
        }
    }

    /// Add the preference if absent, remove it if present.
    pub fn toggle_pref(&mut self, pref: SightseeingPref) {
        if let Some(pos) = self.sightseeing_prefs.iter().position(|p| *p == pref) {
            self.sightseeing_prefs.remove(pos);
        } else {
            self.sightseeing_prefs.push(pref);
        }
    }

    /// Clear all input after a successful submission.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Validate the input and build the submission payload.
    ///
    /// When sightseeing is declined, days are omitted and preferences are
    /// empty no matter what the form still holds.
    pub fn to_submission(&self, pseudonym_id: &str) -> CoreErrorResult<IntakeSubmission> {
        let full_name = required("fullName", "Full name", &self.full_name)?;
        let age = parse_in_range("age", "Age", &self.age, MIN_AGE, MAX_AGE)?;
        let phone = required("phone", "Phone number", &self.phone)?;
        let country = required("country", "Country", &self.country)?;

        let budget: f64 = self
            .budget
            .trim()
            .parse()
            .ok()
            .filter(|b: &f64| b.is_finite() && *b >= 0.0)
            .ok_or_else(|| CoreError::validation("budget", "Budget must be a number of 0 or more"))?;

        let (sightseeing_days, sightseeing_prefs) = match self.has_sightseeing {
            Sightseeing::Yes => (
                Some(parse_in_range(
                    "sightseeingDays",
                    "Sightseeing days",
                    &self.sightseeing_days,
                    MIN_SIGHTSEEING_DAYS,
                    MAX_SIGHTSEEING_DAYS,
                )?),
                self.sightseeing_prefs.clone(),
            ),
            Sightseeing::No => (None, Vec::new()),
        };

        let notes = Some(self.notes.trim())
            .filter(|n| !n.is_empty())
            .map(String::from);

        Ok(IntakeSubmission {
            full_name,
            age,
            phone,
            country,
            budget,
            has_sightseeing: self.has_sightseeing,
            sightseeing_days,
            sightseeing_prefs,
            notes,
            pseudonym_id: pseudonym_id.to_string(),
        })
    }
}

#[track_caller]
pub(crate) fn required(field: &'static str, label: &str, value: &str) -> CoreErrorResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation(field, format!("{label} is required")));
    }
    Ok(trimmed.to_string())
}

#[track_caller]
pub(crate) fn parse_in_range(
    field: &'static str,
    label: &str,
    value: &str,
    min: u32,
    max: u32,
) -> CoreErrorResult<u32> {
    value
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|v| (min..=max).contains(v))
        .ok_or_else(|| {
            CoreError::validation(
                field,
                format!("{label} must be a whole number between {min} and {max}"),
            )
        })
}
