//! Dynamic provider trait definition

use crate::error::{CloudError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Dynamic resource provider
///
/// A provider lets the engine manage a resource type it has no built-in
/// knowledge of. Only `create` is mandatory; every other hook falls back to
/// the engine default, which treats the resource as create-only.
#[async_trait]
pub trait DynamicProvider: Send + Sync {
    /// Returns the provider name (e.g., "swag-webhook")
    fn name(&self) -> &str;

    /// Lifecycle hooks this provider actually implements
    fn capabilities(&self) -> Capabilities {
        Capabilities::create_only()
    }

    /// Create the resource and return its identifier and outputs
    async fn create(&self, inputs: &serde_json::Value) -> Result<CreateResult>;

    /// Refresh the outputs of an existing resource
    async fn read(&self, id: &str, outputs: &serde_json::Value) -> Result<ReadResult> {
        Ok(ReadResult {
            id: id.to_string(),
            outputs: outputs.clone(),
        })
    }

    /// Compare previously applied inputs against newly declared ones
    async fn diff(
        &self,
        _id: &str,
        olds: &serde_json::Value,
        news: &serde_json::Value,
    ) -> Result<DiffResult> {
        Ok(DiffResult::structural(olds, news))
    }

    /// Update an existing resource in place
    async fn update(
        &self,
        _id: &str,
        _olds: &serde_json::Value,
        _news: &serde_json::Value,
    ) -> Result<serde_json::Value> {
        Err(CloudError::Unsupported {
            provider: self.name().to_string(),
            operation: "update".to_string(),
        })
    }

    /// Delete an existing resource
    async fn delete(&self, _id: &str, _outputs: &serde_json::Value) -> Result<()> {
        Err(CloudError::Unsupported {
            provider: self.name().to_string(),
            operation: "delete".to_string(),
        })
    }
}

/// Lifecycle hooks implemented by a provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub update: bool,
    pub delete: bool,
}

impl Capabilities {
    pub fn create_only() -> Self {
        Self {
            update: false,
            delete: false,
        }
    }

    pub fn full() -> Self {
        Self {
            update: true,
            delete: true,
        }
    }

    pub fn is_create_only(&self) -> bool {
        !self.update && !self.delete
    }
}

/// Result of a `create` hook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateResult {
    /// Identifier assigned to the resource
    pub id: String,

    /// Output record persisted by the engine
    pub outputs: serde_json::Value,
}

/// Result of a `read` hook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadResult {
    pub id: String,
    pub outputs: serde_json::Value,
}

/// Result of a `diff` hook
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResult {
    /// Input keys whose values differ
    pub changed_keys: Vec<String>,
}

impl DiffResult {
    /// Key-by-key comparison of two input records
    ///
    /// Non-object values are compared as a whole and reported under `"*"`.
    pub fn structural(olds: &serde_json::Value, news: &serde_json::Value) -> Self {
        let changed_keys = match (olds.as_object(), news.as_object()) {
            (Some(old), Some(new)) => {
                let keys: BTreeSet<&String> = old.keys().chain(new.keys()).collect();
                keys.into_iter()
                    .filter(|k| old.get(*k) != new.get(*k))
                    .cloned()
                    .collect()
            }
            _ if olds != news => vec!["*".to_string()],
            _ => Vec::new(),
        };

        Self { changed_keys }
    }

    pub fn has_changes(&self) -> bool {
        !self.changed_keys.is_empty()
    }
}

/// Set of resources declared by the project
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceSet {
    /// Resources indexed by `type:name`
    pub resources: BTreeMap<String, ResourceConfig>,
}

impl ResourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, resource: ResourceConfig) {
        self.resources.insert(resource.key(), resource);
    }

    pub fn get(&self, resource_type: &str, name: &str) -> Option<&ResourceConfig> {
        let key = format!("{}:{}", resource_type, name);
        self.resources.get(&key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.resources.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResourceConfig> {
        self.resources.values()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn by_type(&self, resource_type: &str) -> Vec<&ResourceConfig> {
        self.resources
            .values()
            .filter(|r| r.resource_type == resource_type)
            .collect()
    }
}

/// A declared resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceConfig {
    /// Resource type (e.g., "swag")
    pub resource_type: String,

    /// Logical name given in the project file
    pub name: String,

    /// Inputs handed to the provider
    pub inputs: serde_json::Value,
}

impl ResourceConfig {
    pub fn new(
        resource_type: impl Into<String>,
        name: impl Into<String>,
        inputs: serde_json::Value,
    ) -> Self {
        Self {
            resource_type: resource_type.into(),
            name: name.into(),
            inputs,
        }
    }

    /// Get the full resource key (type:name)
    pub fn key(&self) -> String {
        format!("{}:{}", self.resource_type, self.name)
    }

    /// Get an input value as a specific type
    pub fn get_input<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.inputs
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }
}
