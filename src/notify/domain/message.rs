//! Outbound email message value type.

use crate::directory::domain::EmailAddress;
use serde::{Deserialize, Serialize};

/// A fully rendered email ready for handoff to a delivery adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
    to: EmailAddress,
    subject: String,
    html_body: String,
    plain_body: Option<String>,
}

impl EmailMessage {
    /// Creates a message with an HTML body and no plain-text alternative.
    #[must_use]
    pub fn new(to: EmailAddress, subject: impl Into<String>, html_body: impl Into<String>) -> Self {
        Self {
            to,
            subject: subject.into(),
            html_body: html_body.into(),
            plain_body: None,
        }
    }

    /// Sets a plain-text alternative body.
    #[must_use]
    pub fn with_plain_body(mut self, plain_body: impl Into<String>) -> Self {
        self.plain_body = Some(plain_body.into());
        self
    }

    /// Returns the recipient address.
    #[must_use]
    pub const fn to(&self) -> &EmailAddress {
        &self.to
    }

    /// Returns the subject line.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Returns the HTML body.
    #[must_use]
    pub fn html_body(&self) -> &str {
        &self.html_body
    }

    /// Returns the plain-text alternative body, if one was set.
    #[must_use]
    pub fn plain_body(&self) -> Option<&str> {
        self.plain_body.as_deref()
    }
}
