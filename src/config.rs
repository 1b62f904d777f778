//! Environment-backed configuration for the process composition root.
//!
//! Nothing in this crate reads the environment implicitly. The embedding
//! process loads [`AppConfig`] once at startup and passes the pieces into
//! adapter and service constructors, so every dependency stays an explicit,
//! swappable handle.

use std::env;

use crate::directory::domain::EmailAddress;

/// Fallback base URL for invitation accept links.
const DEFAULT_ACCEPT_LINK_BASE: &str = "http://localhost:8000";

/// Delivery settings for the HTTP mail gateway.
///
/// Absent configuration disables outbound mail entirely; the gateway then
/// no-ops and reports every send as failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailerConfig {
    /// Mail-API endpoint receiving message payloads as JSON.
    pub endpoint: String,
    /// Sender address stamped on every outbound message.
    pub sender: EmailAddress,
    /// Optional bearer token for the mail API.
    pub api_token: Option<String>,
}

impl MailerConfig {
    /// Reads mailer settings from `MAIL_API_URL`, `MAIL_FROM`, and
    /// `MAIL_API_TOKEN`.
    ///
    /// Returns `None` unless both the endpoint and the sender are present.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let endpoint = env::var("MAIL_API_URL").ok()?;
        let sender = env::var("MAIL_FROM").ok()?;
        Some(Self {
            endpoint,
            sender: EmailAddress::new(sender),
            api_token: env::var("MAIL_API_TOKEN").ok(),
        })
    }
}

/// Top-level configuration assembled by the composition root.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `PostgreSQL` connection string, when persistence is Postgres-backed.
    pub database_url: Option<String>,
    /// Mailer settings; `None` leaves notification delivery disabled.
    pub mailer: Option<MailerConfig>,
    /// Base URL that invitation accept links are built against.
    pub accept_link_base: String,
}

impl AppConfig {
    /// Loads configuration from a `.env` file (when present) and the
    /// process environment.
    #[must_use]
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded environment overrides");
        }

        Self {
            database_url: env::var("DATABASE_URL").ok(),
            mailer: MailerConfig::from_env(),
            accept_link_base: env::var("ACCEPT_LINK_BASE")
                .unwrap_or_else(|_| DEFAULT_ACCEPT_LINK_BASE.to_owned()),
        }
    }
}
