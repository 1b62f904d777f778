//! In-memory recording gateway for tests and embedding.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::notify::{domain::EmailMessage, ports::NotificationGateway};

/// Gateway that records every message instead of delivering it.
///
/// The reported outcome is fixed at construction, so tests can exercise both
/// the delivered and the swallowed-failure paths of calling services.
#[derive(Debug, Clone)]
pub struct RecordingGateway {
    sent: Arc<RwLock<Vec<EmailMessage>>>,
    outcome: bool,
}

impl RecordingGateway {
    /// Creates a recording gateway that reports every send as delivered.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sent: Arc::new(RwLock::new(Vec::new())),
            outcome: true,
        }
    }

    /// Creates a recording gateway that reports every send as failed.
    #[must_use]
    pub fn rejecting() -> Self {
        Self {
            sent: Arc::new(RwLock::new(Vec::new())),
            outcome: false,
        }
    }

    /// Returns a snapshot of every message handed to the gateway so far.
    #[must_use]
    pub fn sent(&self) -> Vec<EmailMessage> {
        match self.sent.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Default for RecordingGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationGateway for RecordingGateway {
    async fn send(&self, message: &EmailMessage) -> bool {
        match self.sent.write() {
            Ok(mut guard) => guard.push(message.clone()),
            Err(poisoned) => poisoned.into_inner().push(message.clone()),
        }
        self.outcome
    }
}
