//! Swag webhook provider for swagstack
//!
//! Implements the `DynamicProvider` trait for swag orders. Creating a `swag`
//! resource posts the order to a webhook; the order's email becomes the
//! resource id and the outputs are the inputs, unchanged.
//!
//! # Example
//!
//! ```ignore
//! use swagstack_cloud::{Engine, GlobalState};
//! use swagstack_webhook::{SwagProvider, WebhookClient, swag_resources};
//!
//! let mut engine = Engine::new();
//! SwagProvider::register(&mut engine, WebhookClient::new("https://hooks.example.com/swag"));
//!
//! let mut state = GlobalState::new();
//! let plan = engine.plan(&swag_resources(&project)?, &state).await?;
//! let result = engine.apply(&plan, &mut state).await;
//! ```

pub mod client;
pub mod error;
pub mod provider;

pub use client::{WEBHOOK_URL_ENV, WebhookClient, WebhookResponse};
pub use error::{Result, WebhookError};
pub use provider::{SWAG_RESOURCE_TYPE, SwagProvider, swag_resources};
