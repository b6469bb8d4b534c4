//! Provider host error types

use thiserror::Error;

/// Errors raised by the host engine and by dynamic providers
#[derive(Error, Debug)]
pub enum CloudError {
    #[error("Provider not found for resource type: {0}")]
    ProviderNotFound(String),

    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Operation '{operation}' is not supported by provider {provider}")]
    Unsupported { provider: String, operation: String },

    #[error("Invalid inputs for {resource}: {message}")]
    InvalidInputs { resource: String, message: String },

    #[error("Provider call failed: {0}")]
    ProviderFailed(String),

    #[error("State file error: {0}")]
    StateError(String),

    #[error("Lock acquisition failed: {0}")]
    LockError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CloudError>;
