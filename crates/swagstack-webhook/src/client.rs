//! Webhook HTTP client
//!
//! Posts swag orders as JSON to a single fixed endpoint. The client adds no
//! timeout, retry or status-code handling of its own.

use crate::error::{Result, WebhookError};
use serde::Deserialize;
use swagstack_core::{SwagOrder, WebhookSettings};

/// Environment variable consulted when the project declares no webhook
pub const WEBHOOK_URL_ENV: &str = "SWAG_WEBHOOK_URL";

/// Webhook client bound to one endpoint
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: reqwest::Client,
    url: String,
}

impl WebhookClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Resolve the endpoint from project settings, falling back to `SWAG_WEBHOOK_URL`
    pub fn from_settings(settings: Option<&WebhookSettings>) -> Result<Self> {
        if let Some(settings) = settings {
            return Ok(Self::new(&settings.url));
        }
        std::env::var(WEBHOOK_URL_ENV)
            .map(Self::new)
            .map_err(|_| WebhookError::MissingUrl(WEBHOOK_URL_ENV.to_string()))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Submit one order
    ///
    /// Sends exactly one `POST` with a JSON body. Fails on transport errors
    /// and on bodies that are not JSON; the `success` flag is returned as-is.
    pub async fn submit(&self, order: &SwagOrder) -> Result<WebhookResponse> {
        tracing::debug!(url = %self.url, email = %order.email, "Posting swag order");

        let response = self.client.post(&self.url).json(order).send().await?;
        let status = response.status();
        let body: WebhookResponse = response.json().await?;

        tracing::debug!(status = %status, success = body.success, "Webhook responded");
        Ok(body)
    }
}

/// Response body of the webhook
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WebhookResponse {
    #[serde(default)]
    pub success: bool,
}
