//! Build-once service container
//!
//! The wiring pass populates a [`ContainerBuilder`] and freezes it into a
//! read-only [`Container`]. The container holds plain data: parameters,
//! aliases, and service definitions. Trait objects are produced separately
//! by the resolver so the container stays cheap to clone and inspect.

use crate::constants::SERVICE_ALIAS_PREFIX;
use crate::error_ext::ErrorContext;
use postroom_domain::error::Result;
use postroom_domain::registry::ServiceKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Name of the container alias for a messaging service kind
pub fn service_alias(kind: ServiceKind) -> String {
    format!("{}{}", SERVICE_ALIAS_PREFIX, kind)
}

/// A service declared by a wiring resource
///
/// Definitions are data, not instances. The resolver realizes a definition
/// through the provider registry using its `kind` and `provider` fields;
/// definitions that only exist for layers above the resolver (form types,
/// repositories) leave `provider` empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDefinition {
    /// Service kind this definition satisfies
    pub kind: String,

    /// Registry provider realizing the definition
    #[serde(default)]
    pub provider: String,

    /// Human-readable description
    #[serde(default)]
    pub description: Option<String>,

    /// Provider-specific settings passed through to the factory
    #[serde(default)]
    pub extra: HashMap<String, Value>,
}

/// Parsed contents of one wiring resource
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WiringResource {
    /// Resource name, as requested from the catalog
    #[serde(skip)]
    pub name: String,

    /// Parameters the resource contributes
    #[serde(default)]
    pub parameters: BTreeMap<String, Value>,

    /// Service definitions the resource contributes
    #[serde(default)]
    pub services: BTreeMap<String, ServiceDefinition>,
}

impl WiringResource {
    /// Parse a TOML wiring resource document
    pub fn from_toml(name: &str, raw: &str) -> Result<Self> {
        let mut resource: WiringResource = toml::from_str(raw)
            .with_context(|| format!("Failed to parse wiring resource '{}'", name))?;
        resource.name = name.to_string();
        Ok(resource)
    }
}

/// Mutable container being populated by the wiring pass
///
/// Writes follow merge order: a later write to the same key replaces the
/// earlier one. The pass relies on this exactly once, when a bridge
/// replaces the sentinel recipient field type.
#[derive(Debug, Default)]
pub struct ContainerBuilder {
    parameters: BTreeMap<String, Value>,
    aliases: BTreeMap<String, String>,
    definitions: BTreeMap<String, ServiceDefinition>,
    loaded_resources: Vec<String>,
}

impl ContainerBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one wiring resource into the container
    pub fn merge_resource(&mut self, resource: WiringResource) {
        debug!(
            resource = %resource.name,
            parameters = resource.parameters.len(),
            services = resource.services.len(),
            "Merged wiring resource"
        );
        self.loaded_resources.push(resource.name);
        self.parameters.extend(resource.parameters);
        self.definitions.extend(resource.services);
    }

    /// Set a parameter
    pub fn set_parameter<K: Into<String>, V: Into<Value>>(&mut self, name: K, value: V) {
        self.parameters.insert(name.into(), value.into());
    }

    /// Point an alias at a service definition id
    pub fn set_alias<K: Into<String>, T: Into<String>>(&mut self, name: K, target: T) {
        self.aliases.insert(name.into(), target.into());
    }

    /// Read a parameter back during the pass
    pub fn parameter(&self, name: &str) -> Option<&Value> {
        self.parameters.get(name)
    }

    /// Read a string parameter back during the pass
    pub fn parameter_str(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).and_then(Value::as_str)
    }

    /// Freeze the builder into a read-only container
    pub fn freeze(self) -> Container {
        Container {
            parameters: self.parameters,
            aliases: self.aliases,
            definitions: self.definitions,
            loaded_resources: self.loaded_resources,
        }
    }
}

/// Read-only container produced by a completed wiring pass
///
/// Exists only in fully populated form: a failed pass never yields one.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    parameters: BTreeMap<String, Value>,
    aliases: BTreeMap<String, String>,
    definitions: BTreeMap<String, ServiceDefinition>,
    loaded_resources: Vec<String>,
}

impl Container {
    /// Look up a parameter
    pub fn parameter(&self, name: &str) -> Option<&Value> {
        self.parameters.get(name)
    }

    /// Look up a string parameter
    pub fn parameter_str(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).and_then(Value::as_str)
    }

    /// Look up the definition id an alias points at
    pub fn alias(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(String::as_str)
    }

    /// Look up a service definition by id
    pub fn definition(&self, id: &str) -> Option<&ServiceDefinition> {
        self.definitions.get(id)
    }

    /// Names of the wiring resources merged into this container, in load order
    pub fn loaded_resources(&self) -> &[String] {
        &self.loaded_resources
    }

    /// All parameter names, sorted
    pub fn parameter_names(&self) -> Vec<&str> {
        self.parameters.keys().map(String::as_str).collect()
    }

    /// All alias names, sorted
    pub fn alias_names(&self) -> Vec<&str> {
        self.aliases.keys().map(String::as_str).collect()
    }

    /// All service definition ids, sorted
    pub fn definition_ids(&self) -> Vec<&str> {
        self.definitions.keys().map(String::as_str).collect()
    }
}
