use mt_core::{Identity, SessionToken};

use async_trait::async_trait;

/// What the identity provider currently reports.
#[derive(Debug, Clone)]
pub enum ProviderSession {
    /// Provider has not resolved yet; indistinguishable from signed out,
    /// so nothing may be decided
    Loading,
    SignedOut,
    SignedIn {
        identity: Identity,
        token: SessionToken,
    },
}

/// Source of the signed-in identity and its session token
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn session(&self) -> ProviderSession;
}

/// Provider backed by an already-resolved session, e.g. one handed over on
/// the command line.
#[derive(Debug, Clone)]
pub struct StaticIdentityProvider {
    session: ProviderSession,
}

impl StaticIdentityProvider {
    pub fn signed_in(identity: Identity, token: SessionToken) -> Self {
        Self {
            session: ProviderSession::SignedIn { identity, token },
        }
    }

    pub fn signed_out() -> Self {
        Self {
            session: ProviderSession::SignedOut,
        }
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn session(&self) -> ProviderSession {
        self.session.clone()
    }
}
