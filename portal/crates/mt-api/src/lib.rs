//! mt-api
//!
//! Typed HTTP client for the MedicoTourism backend services.

pub(crate) mod client;

#[cfg(test)]
mod tests;

pub use client::responses::{MessageResponse, SetRoleResponse, SyncUserResponse};
pub use client::{ApiClientResult, Client, ClientError, ErrorKind};
