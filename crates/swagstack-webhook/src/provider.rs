//! Swag order provider
//!
//! Create-only: an order is submitted once and never updated or withdrawn.

use crate::client::WebhookClient;
use async_trait::async_trait;
use std::sync::Arc;
use swagstack_cloud::{
    CloudError, CreateResult, DynamicProvider, Engine, ResourceConfig, ResourceSet,
};
use swagstack_core::{Project, SwagOrder};

/// Resource type handled by [`SwagProvider`]
pub const SWAG_RESOURCE_TYPE: &str = "swag";

/// Dynamic provider posting swag orders to a webhook
pub struct SwagProvider {
    client: WebhookClient,
}

impl SwagProvider {
    pub fn new(client: WebhookClient) -> Self {
        Self { client }
    }

    /// Register a provider for `swag` resources on the engine
    pub fn register(engine: &mut Engine, client: WebhookClient) {
        engine.register(SWAG_RESOURCE_TYPE, Arc::new(Self::new(client)));
    }
}

#[async_trait]
impl DynamicProvider for SwagProvider {
    fn name(&self) -> &str {
        "swag-webhook"
    }

    async fn create(&self, inputs: &serde_json::Value) -> swagstack_cloud::Result<CreateResult> {
        let order: SwagOrder =
            serde_json::from_value(inputs.clone()).map_err(|e| CloudError::InvalidInputs {
                resource: SWAG_RESOURCE_TYPE.to_string(),
                message: e.to_string(),
            })?;

        let response = self
            .client
            .submit(&order)
            .await
            .map_err(|e| CloudError::ProviderFailed(e.to_string()))?;

        // The flag is reported but does not change the outcome
        if !response.success {
            tracing::warn!(
                email = %order.email,
                "Webhook did not report success; the order is recorded anyway"
            );
        }

        Ok(CreateResult {
            id: order.identifier().to_string(),
            outputs: inputs.clone(),
        })
    }
}

/// Build the resource set for every swag order declared in the project
pub fn swag_resources(project: &Project) -> swagstack_cloud::Result<ResourceSet> {
    let mut set = ResourceSet::new();
    for (name, order) in &project.swag {
        set.add(ResourceConfig::new(
            SWAG_RESOURCE_TYPE,
            name,
            serde_json::to_value(order)?,
        ));
    }
    Ok(set)
}
