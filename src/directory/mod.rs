//! User directory for Paddock.
//!
//! The directory resolves people by email address with get-or-create
//! semantics: a user record is created lazily the first time an email
//! appears in any operation (group creation, invitation, task assignment)
//! and is returned unchanged on every later lookup. The module follows
//! hexagonal architecture:
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
