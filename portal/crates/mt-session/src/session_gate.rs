use crate::backend::UserBackend;
use crate::cache::LocalCache;
use crate::gate::gate;
use crate::page::{Destination, Page};
use crate::provider::{IdentityProvider, ProviderSession};
use crate::state::SyncState;
use crate::DEFAULT_CALL_TIMEOUT;

use mt_api::ApiClientResult;
use mt_core::{Identity, Role, SessionToken};

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use log::{debug, info, warn};
use serde::Serialize;
use tokio::sync::OnceCell;

/// Result of a page load passing through the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum GateOutcome {
    /// Provider still loading; nothing decided, nothing sent
    Pending,
    Render {
        page: Page,
        state: SyncState,
    },
    Redirect {
        destination: Destination,
        state: Option<SyncState>,
    },
}

impl GateOutcome {
    /// Where the page load ends up, if decided.
    pub fn destination(&self) -> Option<Destination> {
        match self {
            Self::Pending => None,
            Self::Render { page, .. } => Some(Destination::Requested(*page)),
            Self::Redirect { destination, .. } => Some(*destination),
        }
    }
}

type SyncCell = Arc<OnceCell<()>>;

/// Keeps the backend user record in step with the signed-in identity and
/// gates page loads on role and verification.
///
/// Syncing happens at most once per identity for the lifetime of the gate.
/// Backend failures never surface as errors; they degrade to the more
/// restrictive redirect.
pub struct SessionGate<P, B> {
    provider: P,
    backend: B,
    cache: LocalCache,
    timeout: Duration,
    syncs: Mutex<HashMap<String, SyncCell>>,
    states: Mutex<HashMap<String, SyncState>>,
}

impl<P, B> SessionGate<P, B>
where
    P: IdentityProvider,
    B: UserBackend,
{
    pub fn new(provider: P, backend: B, cache: LocalCache) -> Self {
        Self {
            provider,
            backend,
            cache,
            timeout: DEFAULT_CALL_TIMEOUT,
            syncs: Mutex::new(HashMap::new()),
            states: Mutex::new(HashMap::new()),
        }
    }

    /// Bound applied to every backend call the gate makes
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn cache(&self) -> &LocalCache {
        &self.cache
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Identity and token of the signed-in user, if the provider has one.
    pub async fn signed_in(&self) -> Option<(Identity, SessionToken)> {
        match self.provider.session().await {
            ProviderSession::SignedIn { identity, token } => Some((identity, token)),
            ProviderSession::Loading | ProviderSession::SignedOut => None,
        }
    }

    pub fn state(&self, identity: &Identity) -> SyncState {
        self.states().get(&identity.id).copied().unwrap_or_default()
    }

    /// Make sure the backend has a user record for `identity`.
    ///
    /// The first caller for an identity installs the in-flight marker before
    /// awaiting anything; every concurrent or later caller waits on the same
    /// marker, so exactly one write is issued. A failed write still counts
    /// as synced and is not retried.
    pub async fn ensure_synced(&self, identity: &Identity, token: &SessionToken) -> SyncState {
        let cell = {
            let mut syncs = self.syncs.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(syncs.entry(identity.id.clone()).or_default())
        };

        if cell.initialized() {
            debug!("User {} already synced", identity.id);
        }

        cell.get_or_init(|| self.sync_once(identity, token)).await;
        self.state(identity)
    }

    async fn sync_once(&self, identity: &Identity, token: &SessionToken) {
        info!("Syncing user {}", identity.id);

        let role = self
            .bounded("sync user", self.backend.sync_user(token, identity))
            .await
            .flatten();

        // Without a server-assigned role, state and cache keep what they had.
        self.update_state(identity, |state| {
            state.synced = true;
            if role.is_some() {
                state.role = role;
            }
        });

        match role {
            Some(role) => {
                info!("User {} synced with role {}", identity.id, role);
                self.remember(identity, role, None);
            }
            None => debug!("User {} synced; no role in response", identity.id),
        }
    }

    /// Last-known role without touching the network.
    ///
    /// Only a placeholder until `resolve_role` answers.
    pub fn cached_role(&self, identity: &Identity) -> Option<Role> {
        self.state(identity)
            .role
            .or_else(|| self.cache.role(&identity.id))
    }

    /// Fetch the authoritative role; `Role::Unset` when it cannot be fetched.
    pub async fn resolve_role(&self, identity: &Identity, token: &SessionToken) -> Role {
        let role = self
            .bounded("fetch role", self.backend.fetch_role(token, identity))
            .await;

        self.update_state(identity, |state| state.role = role);

        match role {
            Some(role) => {
                self.remember(identity, role, None);
                role
            }
            None => Role::Unset,
        }
    }

    /// Fetch verification status; `false` when it cannot be fetched.
    pub async fn resolve_verified(&self, identity: &Identity, token: &SessionToken) -> bool {
        let verified = self
            .bounded("fetch status", self.backend.fetch_verified(token))
            .await;

        self.update_state(identity, |state| state.verified = verified);

        match verified {
            Some(verified) => {
                if let Err(e) = self.cache.remember_verified(&identity.id, verified) {
                    warn!("Failed to update session cache: {e}");
                }
                verified
            }
            None => false,
        }
    }

    /// Record a role the backend has just confirmed, e.g. after role selection.
    pub fn record_role(&self, identity: &Identity, role: Role) {
        self.update_state(identity, |state| state.role = Some(role));
        self.remember(identity, role, None);
    }

    /// Record a verification the backend has just accepted.
    pub fn record_verified(&self, identity: &Identity, verified: bool) {
        self.update_state(identity, |state| state.verified = Some(verified));
        if let Err(e) = self.cache.remember_verified(&identity.id, verified) {
            warn!("Failed to update session cache: {e}");
        }
    }

    /// Run a page load through the gate.
    ///
    /// Call order is fixed: sync, then role, then (only for pages that need
    /// it and only with a role set) verification status.
    pub async fn enter(&self, page: Page) -> GateOutcome {
        let (identity, token) = match self.provider.session().await {
            ProviderSession::Loading => {
                debug!("Identity provider still loading; deferring {page}");
                return GateOutcome::Pending;
            }
            ProviderSession::SignedOut if !page.is_protected() => {
                return GateOutcome::Render {
                    page,
                    state: SyncState::default(),
                };
            }
            ProviderSession::SignedOut => {
                info!("Signed out; redirecting {page} to sign-in");
                return GateOutcome::Redirect {
                    destination: Destination::SignIn,
                    state: None,
                };
            }
            ProviderSession::SignedIn { identity, token } => (identity, token),
        };

        let state = self.ensure_synced(&identity, &token).await;
        if !page.is_protected() {
            return GateOutcome::Render { page, state };
        }

        let role = self.resolve_role(&identity, &token).await;
        let verified = if role.is_set() && page.requires_verification() {
            self.resolve_verified(&identity, &token).await
        } else {
            self.state(&identity).effective_verified()
        };

        let state = self.state(&identity);
        match gate(role, verified, page) {
            Destination::Requested(page) => GateOutcome::Render { page, state },
            destination => {
                info!("Redirecting {page} to {destination}");
                GateOutcome::Redirect {
                    destination,
                    state: Some(state),
                }
            }
        }
    }

    /// Await a backend call under the gate's timeout; failures become `None`.
    async fn bounded<T, F>(&self, call: &str, fut: F) -> Option<T>
    where
        F: Future<Output = ApiClientResult<T>>,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(Ok(value)) => Some(value),
            Ok(Err(e)) => {
                warn!("{call} failed ({:?}): {e}", e.kind());
                None
            }
            Err(_) => {
                warn!("{call} timed out after {:?}", self.timeout);
                None
            }
        }
    }

    fn remember(&self, identity: &Identity, role: Role, verified: Option<bool>) {
        if let Err(e) = self.cache.remember(identity, role, verified) {
            warn!("Failed to update session cache: {e}");
        }
    }

    fn update_state(&self, identity: &Identity, f: impl FnOnce(&mut SyncState)) {
        f(self.states().entry(identity.id.clone()).or_default());
    }

    fn states(&self) -> MutexGuard<'_, HashMap<String, SyncState>> {
        self.states.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
