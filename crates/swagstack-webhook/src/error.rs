//! Webhook provider error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebhookError {
    #[error("Webhook URL is not configured: set `webhook {{ url \"...\" }}` or {0}")]
    MissingUrl(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, WebhookError>;
