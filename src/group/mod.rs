//! Group membership and invitations for Paddock.
//!
//! This module implements the group registry and the invitation workflow:
//! creating groups with an explicit owner, issuing single-use invitation
//! tokens, and admitting invitees into the membership when a token is
//! accepted. Acceptance triggers a best-effort notice to the group owner.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
