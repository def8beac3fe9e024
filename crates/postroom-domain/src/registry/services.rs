//! Messaging Service Provider Registry
//!
//! Auto-registration system for messaging service providers using linkme
//! distributed slices. Providers register one entry per service kind they
//! implement; the wiring pass resolves each kind's configured provider into
//! a typed instance, so downstream code holds trait objects rather than
//! service-name strings.

use std::collections::HashMap;
use std::sync::Arc;

use crate::ports::services::{
    InboxProvider, MessageComposer, MessageSender, ThreadDeleter, ThreadReader, ThreadRemover,
    ThreadSearcher, ThreadUpdater,
};

/// The messaging service kinds the composition layer wires up
///
/// One kind per port trait. The discriminant doubles as the configuration
/// key under the `services` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    /// Turns drafts into outbound messages
    Composer,
    /// Soft-deletes and restores threads
    Deleter,
    /// Read access to inbox/sent threads
    Provider,
    /// Tracks read/unread state
    Reader,
    /// Permanently removes threads
    Remover,
    /// Full-text thread search
    Searcher,
    /// Delivers composed messages
    Sender,
    /// Refreshes denormalized thread metadata
    Updater,
}

impl ServiceKind {
    /// Every service kind, in configuration-key order
    pub const ALL: [ServiceKind; 8] = [
        ServiceKind::Composer,
        ServiceKind::Deleter,
        ServiceKind::Provider,
        ServiceKind::Reader,
        ServiceKind::Remover,
        ServiceKind::Searcher,
        ServiceKind::Sender,
        ServiceKind::Updater,
    ];

    /// The configuration key for this kind
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceKind::Composer => "composer",
            ServiceKind::Deleter => "deleter",
            ServiceKind::Provider => "provider",
            ServiceKind::Reader => "reader",
            ServiceKind::Remover => "remover",
            ServiceKind::Searcher => "searcher",
            ServiceKind::Sender => "sender",
            ServiceKind::Updater => "updater",
        }
    }
}

impl std::fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for service provider creation
///
/// Contains the provider name plus free-form settings. Providers should use
/// what they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct ServiceProviderConfig {
    /// Provider name (e.g., "null")
    pub provider: String,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, serde_json::Value>,
}

impl ServiceProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// A resolved service provider instance
///
/// One variant per [`ServiceKind`], each holding the corresponding port
/// trait object. Factories return the variant matching their registered
/// kind.
#[derive(Debug, Clone)]
pub enum ServiceInstance {
    /// A [`MessageComposer`] implementation
    Composer(Arc<dyn MessageComposer>),
    /// A [`ThreadDeleter`] implementation
    Deleter(Arc<dyn ThreadDeleter>),
    /// An [`InboxProvider`] implementation
    Provider(Arc<dyn InboxProvider>),
    /// A [`ThreadReader`] implementation
    Reader(Arc<dyn ThreadReader>),
    /// A [`ThreadRemover`] implementation
    Remover(Arc<dyn ThreadRemover>),
    /// A [`ThreadSearcher`] implementation
    Searcher(Arc<dyn ThreadSearcher>),
    /// A [`MessageSender`] implementation
    Sender(Arc<dyn MessageSender>),
    /// A [`ThreadUpdater`] implementation
    Updater(Arc<dyn ThreadUpdater>),
}

impl ServiceInstance {
    /// The service kind this instance satisfies
    pub fn kind(&self) -> ServiceKind {
        match self {
            ServiceInstance::Composer(_) => ServiceKind::Composer,
            ServiceInstance::Deleter(_) => ServiceKind::Deleter,
            ServiceInstance::Provider(_) => ServiceKind::Provider,
            ServiceInstance::Reader(_) => ServiceKind::Reader,
            ServiceInstance::Remover(_) => ServiceKind::Remover,
            ServiceInstance::Searcher(_) => ServiceKind::Searcher,
            ServiceInstance::Sender(_) => ServiceKind::Sender,
            ServiceInstance::Updater(_) => ServiceKind::Updater,
        }
    }

    /// Extract the composer, if that is what this instance holds
    pub fn into_composer(self) -> Option<Arc<dyn MessageComposer>> {
        match self {
            ServiceInstance::Composer(instance) => Some(instance),
            _ => None,
        }
    }

    /// Extract the deleter, if that is what this instance holds
    pub fn into_deleter(self) -> Option<Arc<dyn ThreadDeleter>> {
        match self {
            ServiceInstance::Deleter(instance) => Some(instance),
            _ => None,
        }
    }

    /// Extract the inbox provider, if that is what this instance holds
    pub fn into_provider(self) -> Option<Arc<dyn InboxProvider>> {
        match self {
            ServiceInstance::Provider(instance) => Some(instance),
            _ => None,
        }
    }

    /// Extract the reader, if that is what this instance holds
    pub fn into_reader(self) -> Option<Arc<dyn ThreadReader>> {
        match self {
            ServiceInstance::Reader(instance) => Some(instance),
            _ => None,
        }
    }

    /// Extract the remover, if that is what this instance holds
    pub fn into_remover(self) -> Option<Arc<dyn ThreadRemover>> {
        match self {
            ServiceInstance::Remover(instance) => Some(instance),
            _ => None,
        }
    }

    /// Extract the searcher, if that is what this instance holds
    pub fn into_searcher(self) -> Option<Arc<dyn ThreadSearcher>> {
        match self {
            ServiceInstance::Searcher(instance) => Some(instance),
            _ => None,
        }
    }

    /// Extract the sender, if that is what this instance holds
    pub fn into_sender(self) -> Option<Arc<dyn MessageSender>> {
        match self {
            ServiceInstance::Sender(instance) => Some(instance),
            _ => None,
        }
    }

    /// Extract the updater, if that is what this instance holds
    pub fn into_updater(self) -> Option<Arc<dyn ThreadUpdater>> {
        match self {
            ServiceInstance::Updater(instance) => Some(instance),
            _ => None,
        }
    }
}

/// Registry entry for messaging service providers
///
/// Each provider implementation registers one entry per service kind using
/// `#[linkme::distributed_slice(SERVICE_PROVIDERS)]`. The factory must
/// return the [`ServiceInstance`] variant matching `kind`.
pub struct ServiceProviderEntry {
    /// Service kind this entry provides
    pub kind: ServiceKind,
    /// Unique provider name within the kind (e.g., "null")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: fn(&ServiceProviderConfig) -> Result<ServiceInstance, String>,
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static SERVICE_PROVIDERS: [ServiceProviderEntry] = [..];

/// Resolve a service provider by kind and name from the registry
///
/// Searches the registry for an entry matching the kind and the configured
/// provider name, then creates an instance using the entry's factory.
///
/// # Arguments
/// * `kind` - Which service to resolve
/// * `config` - Configuration containing provider name and settings
///
/// # Returns
/// * `Ok(ServiceInstance)` - Created instance, variant matching `kind`
/// * `Err(String)` - Provider not found, factory failure, or kind mismatch
///
/// # Example
///
/// ```ignore
/// let config = ServiceProviderConfig::new("null");
/// let sender = resolve_service_provider(ServiceKind::Sender, &config)?
///     .into_sender()
///     .ok_or("sender factory returned the wrong instance kind")?;
/// ```
pub fn resolve_service_provider(
    kind: ServiceKind,
    config: &ServiceProviderConfig,
) -> Result<ServiceInstance, String> {
    let provider_name = &config.provider;

    for entry in SERVICE_PROVIDERS {
        if entry.kind == kind && entry.name == provider_name.as_str() {
            let instance = (entry.factory)(config)?;
            if instance.kind() != kind {
                return Err(format!(
                    "Provider '{}' produced a {} instance while resolving {}",
                    entry.name,
                    instance.kind(),
                    kind
                ));
            }
            return Ok(instance);
        }
    }

    let available: Vec<&str> = SERVICE_PROVIDERS
        .iter()
        .filter(|e| e.kind == kind)
        .map(|e| e.name)
        .collect();

    Err(format!(
        "Unknown {} provider '{}'. Available providers: {:?}",
        kind, provider_name, available
    ))
}

/// List all registered providers for one service kind
///
/// Returns a list of (name, description) tuples. Useful for CLI help and
/// wiring reports.
pub fn list_service_providers(kind: ServiceKind) -> Vec<(&'static str, &'static str)> {
    SERVICE_PROVIDERS
        .iter()
        .filter(|e| e.kind == kind)
        .map(|e| (e.name, e.description))
        .collect()
}
