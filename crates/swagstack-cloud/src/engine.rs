//! Host engine driving dynamic providers
//!
//! The engine owns the provider registry, turns declared resources plus
//! persisted state into a [`Plan`], and applies it one hook call at a time.

use crate::action::{Action, ActionType, ApplyResult, Plan};
use crate::error::{CloudError, Result};
use crate::provider::{DynamicProvider, ResourceSet};
use crate::state::{GlobalState, ResourceState};
use std::collections::HashMap;
use std::sync::Arc;

/// Provider host
#[derive(Default)]
pub struct Engine {
    providers: HashMap<String, Arc<dyn DynamicProvider>>,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the provider responsible for a resource type
    pub fn register(&mut self, resource_type: impl Into<String>, provider: Arc<dyn DynamicProvider>) {
        let resource_type = resource_type.into();
        tracing::debug!(
            resource_type = %resource_type,
            provider = provider.name(),
            "Registered provider"
        );
        self.providers.insert(resource_type, provider);
    }

    pub fn provider(&self, resource_type: &str) -> Result<&Arc<dyn DynamicProvider>> {
        self.providers
            .get(resource_type)
            .ok_or_else(|| CloudError::ProviderNotFound(resource_type.to_string()))
    }

    /// Calculate the actions needed to reach the declared resources
    pub async fn plan(&self, desired: &ResourceSet, state: &GlobalState) -> Result<Plan> {
        let mut actions = Vec::new();

        for resource in desired.iter() {
            let provider = self.provider(&resource.resource_type)?;
            let key = resource.key();

            let Some(existing) = state.get_resource(&key) else {
                actions.push(
                    Action::new(
                        ActionType::Create,
                        &resource.resource_type,
                        &resource.name,
                        resource.inputs.clone(),
                        format!("create {}", key),
                    )
                    .with_detail("provider", serde_json::json!(provider.name())),
                );
                continue;
            };

            let diff = provider
                .diff(&existing.id, &existing.inputs, &resource.inputs)
                .await?;

            if !diff.has_changes() {
                actions.push(Action::new(
                    ActionType::NoOp,
                    &resource.resource_type,
                    &resource.name,
                    resource.inputs.clone(),
                    format!("{} is up to date", key),
                ));
            } else if provider.capabilities().update {
                actions.push(
                    Action::new(
                        ActionType::Update,
                        &resource.resource_type,
                        &resource.name,
                        resource.inputs.clone(),
                        format!("update {}", key),
                    )
                    .with_detail("changed_keys", serde_json::json!(diff.changed_keys)),
                );
            } else {
                tracing::warn!(
                    resource = %key,
                    changed = ?diff.changed_keys,
                    "Input changes ignored: provider is create-only"
                );
                actions.push(
                    Action::new(
                        ActionType::NoOp,
                        &resource.resource_type,
                        &resource.name,
                        existing.inputs.clone(),
                        format!("{} is create-only, input changes ignored", key),
                    )
                    .with_detail("ignored_changes", serde_json::json!(diff.changed_keys)),
                );
            }
        }

        for (key, existing) in &state.resources {
            if desired.contains_key(key) {
                continue;
            }
            let name = key
                .strip_prefix(&format!("{}:", existing.resource_type))
                .unwrap_or(key);

            let deletable = match self.providers.get(&existing.resource_type) {
                Some(provider) => provider.capabilities().delete,
                None => {
                    tracing::warn!(
                        resource = %key,
                        resource_type = %existing.resource_type,
                        "No provider registered for retained resource"
                    );
                    false
                }
            };

            if deletable {
                actions.push(Action::new(
                    ActionType::Delete,
                    &existing.resource_type,
                    name,
                    existing.inputs.clone(),
                    format!("delete {}", key),
                ));
            } else {
                actions.push(Action::new(
                    ActionType::NoOp,
                    &existing.resource_type,
                    name,
                    existing.inputs.clone(),
                    format!("{} is no longer declared but is retained", key),
                ));
            }
        }

        Ok(Plan::new(actions))
    }

    /// Apply a plan, recording every successful change in `state`
    pub async fn apply(&self, plan: &Plan, state: &mut GlobalState) -> ApplyResult {
        let mut result = ApplyResult::new();
        let start = std::time::Instant::now();

        for action in &plan.actions {
            if action.action_type == ActionType::NoOp {
                continue;
            }

            match self.apply_action(action, state).await {
                Ok(message) => {
                    tracing::info!(action = %action.id, "{}", message);
                    result.add_success(action.id.clone(), message);
                }
                Err(e) => {
                    tracing::error!(action = %action.id, error = %e, "Action failed");
                    result.add_failure(action.id.clone(), e.to_string());
                }
            }
        }

        result.duration_ms = start.elapsed().as_millis() as u64;
        result
    }

    async fn apply_action(&self, action: &Action, state: &mut GlobalState) -> Result<String> {
        let provider = self.provider(&action.resource_type)?;
        let key = action.resource_key();

        match action.action_type {
            ActionType::Create => {
                let created = provider.create(&action.inputs).await?;
                let record = ResourceState::new(&created.id, &action.resource_type, provider.name())
                    .with_inputs(action.inputs.clone())
                    .with_outputs(created.outputs);
                state.set_resource(key.clone(), record);
                Ok(format!("created {} (id: {})", key, created.id))
            }
            ActionType::Update => {
                let existing = state
                    .get_resource(&key)
                    .cloned()
                    .ok_or_else(|| CloudError::ResourceNotFound(key.clone()))?;
                let outputs = provider
                    .update(&existing.id, &existing.inputs, &action.inputs)
                    .await?;
                let mut record = existing.with_inputs(action.inputs.clone()).with_outputs(outputs);
                record.updated_at = chrono::Utc::now();
                state.set_resource(key.clone(), record);
                Ok(format!("updated {}", key))
            }
            ActionType::Delete => {
                let existing = state
                    .get_resource(&key)
                    .ok_or_else(|| CloudError::ResourceNotFound(key.clone()))?;
                provider.delete(&existing.id, &existing.outputs).await?;
                state.remove_resource(&key);
                Ok(format!("deleted {}", key))
            }
            ActionType::NoOp => Ok(format!("{} unchanged", key)),
        }
    }
}
