//! Mail-API delivery adapter backed by `reqwest`.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::config::MailerConfig;
use crate::notify::{domain::EmailMessage, ports::NotificationGateway};

/// Upper bound on a single delivery attempt; there is no retry.
const SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Gateway that POSTs messages as JSON to a configured mail-API endpoint.
///
/// Constructed without configuration, the gateway no-ops and reports every
/// send as failed. Transport and API errors are absorbed and logged; they
/// never reach the calling service.
#[derive(Debug, Clone)]
pub struct HttpMailGateway {
    config: Option<MailerConfig>,
    client: Client,
}

impl HttpMailGateway {
    /// Creates a gateway, disabled when `config` is `None`.
    ///
    /// # Errors
    ///
    /// Returns a [`reqwest::Error`] when the HTTP client cannot be built.
    pub fn new(config: Option<MailerConfig>) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(SEND_TIMEOUT).build()?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl NotificationGateway for HttpMailGateway {
    async fn send(&self, message: &EmailMessage) -> bool {
        let Some(config) = &self.config else {
            tracing::warn!(
                to = %message.to(),
                "mail delivery not configured; dropping notification"
            );
            return false;
        };

        let payload = serde_json::json!({
            "from": config.sender.as_str(),
            "to": message.to().as_str(),
            "subject": message.subject(),
            "html": message.html_body(),
            "text": message.plain_body(),
        });

        let mut request = self.client.post(&config.endpoint).json(&payload);
        if let Some(token) = &config.api_token {
            request = request.bearer_auth(token);
        }

        match request.send().await {
            Ok(response) if response.status().is_success() => {
                tracing::debug!(to = %message.to(), "notification delivered");
                true
            }
            Ok(response) => {
                tracing::warn!(
                    to = %message.to(),
                    status = %response.status(),
                    "mail API rejected notification"
                );
                false
            }
            Err(err) => {
                tracing::warn!(
                    to = %message.to(),
                    error = %err,
                    "notification delivery failed"
                );
                false
            }
        }
    }
}
