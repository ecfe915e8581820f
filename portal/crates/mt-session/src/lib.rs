//! Session-sync gate: keeps the backend user record in step with the
//! signed-in identity and decides where a page load may go.

mod backend;
mod cache;
mod error;
mod gate;
mod nav;
mod page;
mod provider;
mod session_gate;
mod state;

#[cfg(test)]
mod tests;

pub use backend::UserBackend;
pub use cache::{CachedUser, LocalCache};
pub use error::{Result as SessionResult, SessionError};
pub use gate::gate;
pub use nav::{NavLink, nav_links};
pub use page::{Destination, Page};
pub use provider::{IdentityProvider, ProviderSession, StaticIdentityProvider};
pub use session_gate::{GateOutcome, SessionGate};
pub use state::SyncState;

use std::time::Duration;

/// Bound on every backend call made by the gate
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(10);
