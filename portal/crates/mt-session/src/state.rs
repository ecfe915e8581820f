use mt_core::Role;

use serde::Serialize;

/// What the gate knows about one identity in this session.
///
/// `synced` flips to true once per identity and never back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SyncState {
    pub synced: bool,
    pub role: Option<Role>,
    pub verified: Option<bool>,
}

impl SyncState {
    /// Role to gate on; unknown counts as unset.
    pub fn effective_role(&self) -> Role {
        self.role.unwrap_or_default()
    }

    /// Verification to gate on; unknown counts as not verified.
    pub fn effective_verified(&self) -> bool {
        self.verified.unwrap_or(false)
    }
}
