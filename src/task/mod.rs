//! Group-scoped task assignment for Paddock.
//!
//! Tasks are created inside a group and may optionally be assigned to a
//! member by email. The assignee is resolved through the user directory
//! (created on first reference) and receives a best-effort notification
//! describing the group and the task. The module follows hexagonal
//! architecture:
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
