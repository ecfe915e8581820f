use mt_core::Role;

use serde::{Deserialize, Serialize};

/// Response of `/api/addUser`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncUserResponse {
    #[serde(default)]
    pub pseudonym_id: Option<String>,
    #[serde(default)]
    pub user: Option<SyncedUser>,
    #[serde(default)]
    pub role: Option<Role>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncedUser {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

impl SyncUserResponse {
    /// Server-assigned role, wherever the backend put it.
    ///
    /// `None` when the response carries no role at all.
    pub fn canonical_role(&self) -> Option<Role> {
        self.role.or_else(|| self.user.as_ref().and_then(|u| u.role))
    }

    /// Backend handle for the user record
    pub fn record_id(&self) -> Option<&str> {
        self.pseudonym_id
            .as_deref()
            .or_else(|| self.user.as_ref().and_then(|u| u.id.as_deref()))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RoleResponse {
    #[serde(default)]
    pub role: Role,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct StatusResponse {
    #[serde(rename = "isVerified", default)]
    pub is_verified: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetRoleResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}
