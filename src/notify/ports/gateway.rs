//! Notification gateway port.

use crate::notify::domain::EmailMessage;
use async_trait::async_trait;

/// Best-effort notification delivery contract.
///
/// Implementations report the outcome as a boolean and must never return an
/// error or panic: callers treat every send as fire-and-forget, and a failed
/// delivery is logged once and discarded rather than retried.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    /// Attempts to deliver the message, returning whether delivery succeeded.
    async fn send(&self, message: &EmailMessage) -> bool;
}
