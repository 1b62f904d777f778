//! Notification delivery for Paddock.
//!
//! Membership and task services announce state changes by email through the
//! [`ports::NotificationGateway`] port. Delivery is strictly best-effort:
//! the gateway reports success or failure as a boolean and never raises, so
//! no registry operation depends on a notification arriving. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Mail rendering services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
