//! Paddock: group membership, invitations, and task assignment.
//!
//! This crate provides the domain core for a small collaboration service:
//! resolving users lazily by email, creating groups with an explicit owner,
//! admitting members through single-use invitation tokens, and assigning
//! group-scoped tasks, with best-effort email notifications along the way.
//!
//! # Architecture
//!
//! Paddock follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, mail API)
//!
//! HTTP routing, input validation, and authentication are the embedding
//! process's concern; this crate is invoked with pre-validated input and
//! returns typed results. The composition root constructs repositories, a
//! notification gateway, and a clock, and injects them into the services;
//! there is no global state.
//!
//! # Modules
//!
//! - [`directory`]: Get-or-create user resolution keyed by email
//! - [`group`]: Group registry and the invitation workflow
//! - [`task`]: Group-scoped task creation and assignment
//! - [`notify`]: Notification gateway contract, adapters, and mail rendering
//! - [`config`]: Environment-backed wiring for the composition root

pub mod config;
pub mod directory;
pub mod group;
pub mod notify;
pub mod task;
