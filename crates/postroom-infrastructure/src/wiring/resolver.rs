//! Typed service resolution
//!
//! Walks the eight service aliases of a frozen container and realizes each
//! configured definition through the provider registry. The application
//! receives trait objects; no service-name strings survive past this point.

use crate::wiring::container::{service_alias, Container};
use postroom_domain::error::{Error, Result};
use postroom_domain::ports::{
    InboxProvider, MessageComposer, MessageSender, ThreadDeleter, ThreadReader, ThreadRemover,
    ThreadSearcher, ThreadUpdater,
};
use postroom_domain::registry::{
    list_bridges, list_service_providers, resolve_service_provider, ServiceInstance, ServiceKind,
    ServiceProviderConfig,
};
use std::sync::Arc;
use tracing::debug;

/// The typed messaging service set the application consumes
#[derive(Clone)]
pub struct MessagingServices {
    /// Turns drafts into outbound messages
    pub composer: Arc<dyn MessageComposer>,

    /// Soft-deletes and restores threads
    pub deleter: Arc<dyn ThreadDeleter>,

    /// Read access to inbox and sent threads
    pub provider: Arc<dyn InboxProvider>,

    /// Tracks read/unread state
    pub reader: Arc<dyn ThreadReader>,

    /// Permanently removes threads
    pub remover: Arc<dyn ThreadRemover>,

    /// Full-text thread search
    pub searcher: Arc<dyn ThreadSearcher>,

    /// Delivers composed messages
    pub sender: Arc<dyn MessageSender>,

    /// Refreshes denormalized thread metadata
    pub updater: Arc<dyn ThreadUpdater>,
}

impl MessagingServices {
    /// Provider name behind each service kind, in configuration-key order
    pub fn provider_names(&self) -> Vec<(ServiceKind, String)> {
        vec![
            (
                ServiceKind::Composer,
                self.composer.provider_name().to_string(),
            ),
            (
                ServiceKind::Deleter,
                self.deleter.provider_name().to_string(),
            ),
            (
                ServiceKind::Provider,
                self.provider.provider_name().to_string(),
            ),
            (ServiceKind::Reader, self.reader.provider_name().to_string()),
            (
                ServiceKind::Remover,
                self.remover.provider_name().to_string(),
            ),
            (
                ServiceKind::Searcher,
                self.searcher.provider_name().to_string(),
            ),
            (ServiceKind::Sender, self.sender.provider_name().to_string()),
            (
                ServiceKind::Updater,
                self.updater.provider_name().to_string(),
            ),
        ]
    }
}

impl std::fmt::Debug for MessagingServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessagingServices")
            .field("composer", &self.composer.provider_name())
            .field("deleter", &self.deleter.provider_name())
            .field("provider", &self.provider.provider_name())
            .field("reader", &self.reader.provider_name())
            .field("remover", &self.remover.provider_name())
            .field("searcher", &self.searcher.provider_name())
            .field("sender", &self.sender.provider_name())
            .field("updater", &self.updater.provider_name())
            .finish()
    }
}

/// Resolve the typed service set from a frozen container
///
/// For each service kind: follow the `postroom.<kind>` alias to the
/// configured definition id, look up the definition, check its declared
/// kind, and realize it through the provider registry. Every failure names
/// the alias, id, or provider involved.
pub fn resolve_messaging_services(container: &Container) -> Result<MessagingServices> {
    let composer = resolve_kind(container, ServiceKind::Composer)?
        .into_composer()
        .ok_or_else(|| mismatched(ServiceKind::Composer))?;
    let deleter = resolve_kind(container, ServiceKind::Deleter)?
        .into_deleter()
        .ok_or_else(|| mismatched(ServiceKind::Deleter))?;
    let provider = resolve_kind(container, ServiceKind::Provider)?
        .into_provider()
        .ok_or_else(|| mismatched(ServiceKind::Provider))?;
    let reader = resolve_kind(container, ServiceKind::Reader)?
        .into_reader()
        .ok_or_else(|| mismatched(ServiceKind::Reader))?;
    let remover = resolve_kind(container, ServiceKind::Remover)?
        .into_remover()
        .ok_or_else(|| mismatched(ServiceKind::Remover))?;
    let searcher = resolve_kind(container, ServiceKind::Searcher)?
        .into_searcher()
        .ok_or_else(|| mismatched(ServiceKind::Searcher))?;
    let sender = resolve_kind(container, ServiceKind::Sender)?
        .into_sender()
        .ok_or_else(|| mismatched(ServiceKind::Sender))?;
    let updater = resolve_kind(container, ServiceKind::Updater)?
        .into_updater()
        .ok_or_else(|| mismatched(ServiceKind::Updater))?;

    let services = MessagingServices {
        composer,
        deleter,
        provider,
        reader,
        remover,
        searcher,
        sender,
        updater,
    };
    debug!(services = ?services, "Resolved messaging services");
    Ok(services)
}

fn resolve_kind(container: &Container, kind: ServiceKind) -> Result<ServiceInstance> {
    let alias = service_alias(kind);
    let id = container
        .alias(&alias)
        .ok_or_else(|| Error::configuration(format!("Missing service alias '{}'", alias)))?;
    let definition = container.definition(id).ok_or_else(|| {
        Error::not_found(format!(
            "service definition '{}' (aliased by '{}')",
            id, alias
        ))
    })?;
    if definition.kind != kind.as_str() {
        return Err(Error::configuration(format!(
            "Service definition '{}' has kind '{}' but alias '{}' requires '{}'",
            id, definition.kind, alias, kind
        )));
    }

    let mut provider_config = ServiceProviderConfig::new(&definition.provider);
    provider_config.extra = definition.extra.clone();
    resolve_service_provider(kind, &provider_config).map_err(Error::configuration)
}

fn mismatched(kind: ServiceKind) -> Error {
    Error::internal(format!("{} factory produced a mismatched instance", kind))
}

/// Snapshot of everything the registries can provide
#[derive(Debug, Clone)]
pub struct AvailableProviders {
    /// Bridge name and description pairs
    pub bridges: Vec<(&'static str, &'static str)>,

    /// Service provider (kind, name, description) triples
    pub services: Vec<(ServiceKind, &'static str, &'static str)>,
}

/// List every bridge and service provider compiled into the binary
pub fn list_available_providers() -> AvailableProviders {
    let mut services = Vec::new();
    for kind in ServiceKind::ALL {
        for (name, description) in list_service_providers(kind) {
            services.push((kind, name, description));
        }
    }
    AvailableProviders {
        bridges: list_bridges(),
        services,
    }
}

impl std::fmt::Display for AvailableProviders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Available bridges:")?;
        for (name, description) in &self.bridges {
            writeln!(f, "  {} - {}", name, description)?;
        }
        writeln!(f, "Available service providers:")?;
        for (kind, name, description) in &self.services {
            writeln!(f, "  {}: {} - {}", kind, name, description)?;
        }
        Ok(())
    }
}
