//! mt - MedicoTourism patient portal client
//!
//! Drives the portal flows from the command line: every page load passes
//! through the session gate, every form is validated before submission.
//!
//! # Examples
//!
//! ```bash
//! # Where would /visits/new land for this user?
//! mt --token $TOKEN --user-id user_2abc enter /visits/new --pretty
//!
//! # Pick a role, then verify
//! mt role set patient
//! mt verify --age 34 --budget 5000 --availability-days 10
//!
//! # Request a visit with two documents
//! mt visit create --complaint "Knee pain" --doc mri.png=imaging --doc rx.pdf=prescription
//! ```

pub mod app;
pub mod cli;
pub mod commands;
pub mod documents;
pub mod error;
pub mod intake_commands;
pub mod logger;
pub mod role_commands;
pub mod visit_commands;


pub use app::{PortalGate, build_gate, provider_from_cli, run};
pub use cli::Cli;
pub use error::{PortalError, Result as PortalResult};
