use mt_api::{ApiClientResult, Client};
use mt_core::{Identity, Role, SessionToken};

use async_trait::async_trait;

/// Backend calls the gate depends on
#[async_trait]
pub trait UserBackend: Send + Sync {
    /// Create or update the user record; returns the server-assigned role
    /// when the response carries one.
    async fn sync_user(
        &self,
        token: &SessionToken,
        identity: &Identity,
    ) -> ApiClientResult<Option<Role>>;

    async fn fetch_role(&self, token: &SessionToken, identity: &Identity)
    -> ApiClientResult<Role>;

    async fn fetch_verified(&self, token: &SessionToken) -> ApiClientResult<bool>;
}

#[async_trait]
impl UserBackend for Client {
    async fn sync_user(
        &self,
        token: &SessionToken,
        identity: &Identity,
    ) -> ApiClientResult<Option<Role>> {
        let response = Client::sync_user(self, token, identity, Role::Unset).await?;
        Ok(response.canonical_role())
    }

    async fn fetch_role(
        &self,
        token: &SessionToken,
        identity: &Identity,
    ) -> ApiClientResult<Role> {
        self.get_role(token, &identity.id).await
    }

    async fn fetch_verified(&self, token: &SessionToken) -> ApiClientResult<bool> {
        self.get_status(token).await
    }
}
