use crate::models::role::Role;

use serde::{Deserialize, Serialize};

/// Local mirror of the backend user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(rename = "clerkId")]
    pub external_id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default, alias = "isVerified")]
    pub verified: bool,
}
