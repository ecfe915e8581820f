
use crate::{
    IdentityProvider, LocalCache, ProviderSession, SessionGate, StaticIdentityProvider,
    UserBackend,
};

use mt_api::{ApiClientResult, ClientError};
use mt_core::{Identity, Role, SessionToken};

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

/// Backend double that counts calls and records their order.
///
/// `None` for a canned answer makes that call fail. A sync that succeeds
/// without a role in the response is `Some(None)`.
pub(crate) struct FakeBackend {
    pub sync_result: Option<Option<Role>>,
    pub role: Option<Role>,
    pub verified: Option<bool>,
    pub delay: Duration,
    pub sync_calls: AtomicUsize,
    pub role_calls: AtomicUsize,
    pub status_calls: AtomicUsize,
    pub calls: Mutex<Vec<&'static str>>,
}

impl FakeBackend {
    pub fn new(role: Role, verified: bool) -> Self {
        Self {
            sync_result: Some(None),
            role: Some(role),
            verified: Some(verified),
            delay: Duration::ZERO,
            sync_calls: AtomicUsize::new(0),
            role_calls: AtomicUsize::new(0),
            status_calls: AtomicUsize::new(0),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            sync_result: None,
            role: None,
            verified: None,
            ..Self::new(Role::Unset, false)
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn syncs(&self) -> usize {
        self.sync_calls.load(Ordering::SeqCst)
    }

    pub fn role_fetches(&self) -> usize {
        self.role_calls.load(Ordering::SeqCst)
    }

    pub fn status_fetches(&self) -> usize {
        self.status_calls.load(Ordering::SeqCst)
    }

    pub fn call_log(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    async fn answer<T: Copy>(&self, call: &'static str, canned: Option<T>) -> ApiClientResult<T> {
        self.calls.lock().unwrap().push(call);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        canned.ok_or_else(|| ClientError::api_error(500, format!("{call} failed")))
    }
}

#[async_trait]
impl UserBackend for FakeBackend {
    async fn sync_user(
        &self,
        _token: &SessionToken,
        _identity: &Identity,
    ) -> ApiClientResult<Option<Role>> {
        self.sync_calls.fetch_add(1, Ordering::SeqCst);
        self.answer("sync", self.sync_result).await
    }

    async fn fetch_role(
        &self,
        _token: &SessionToken,
        _identity: &Identity,
    ) -> ApiClientResult<Role> {
        self.role_calls.fetch_add(1, Ordering::SeqCst);
        self.answer("role", self.role).await
    }

    async fn fetch_verified(&self, _token: &SessionToken) -> ApiClientResult<bool> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        self.answer("status", self.verified).await
    }
}

/// Provider that never finishes loading
pub(crate) struct LoadingProvider;

#[async_trait]
impl IdentityProvider for LoadingProvider {
    async fn session(&self) -> ProviderSession {
        ProviderSession::Loading
    }
}

pub(crate) fn identity() -> Identity {
    Identity::new("user_2abc")
        .with_email("asha@example.com")
        .with_name("Asha Rao")
}

pub(crate) fn token() -> SessionToken {
    SessionToken::new("sess_token")
}

pub(crate) fn signed_in_gate(
    backend: FakeBackend,
) -> SessionGate<StaticIdentityProvider, FakeBackend> {
    SessionGate::new(
        StaticIdentityProvider::signed_in(identity(), token()),
        backend,
        LocalCache::in_memory(),
    )
}
