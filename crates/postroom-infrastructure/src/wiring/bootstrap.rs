//! Wiring pass entry points
//!
//! [`wire_messaging`] is the single composition root: it runs the phases in
//! a fixed order and either returns a fully wired [`MessagingModule`] or an
//! error naming exactly what went wrong. There is no partial success.

use crate::config::{validate_messaging_config, MessagingConfig, StorageDriver};
use crate::constants::*;
use crate::logging::log_bridge_status;
use crate::wiring::catalog::{EmbeddedWiringCatalog, WiringCatalog};
use crate::wiring::container::{service_alias, Container, ContainerBuilder};
use crate::wiring::resolver::{resolve_messaging_services, MessagingServices};
use postroom_domain::error::{Error, Result};
use postroom_domain::registry::{BridgeRegistry, ServiceKind};
use std::sync::Arc;
use tracing::{debug, info};

/// A fully wired messaging module
///
/// Holds the configuration it was built from, the frozen container, the
/// bridge registry with its availability and enablement state, and the
/// typed service set. All of it is immutable after construction.
#[derive(Debug)]
pub struct MessagingModule {
    config: Arc<MessagingConfig>,
    container: Container,
    bridges: BridgeRegistry,
    services: MessagingServices,
}

impl MessagingModule {
    /// The configuration this module was wired from
    pub fn config(&self) -> &MessagingConfig {
        &self.config
    }

    /// The frozen container
    pub fn container(&self) -> &Container {
        &self.container
    }

    /// Bridge availability and enablement state
    pub fn bridges(&self) -> &BridgeRegistry {
        &self.bridges
    }

    /// The typed messaging service set
    pub fn services(&self) -> &MessagingServices {
        &self.services
    }

    /// Summarize the completed pass
    pub fn report(&self) -> WiringReport {
        WiringReport {
            driver: self.config.driver.to_string(),
            theme: self.config.theme.clone(),
            enabled_bridges: self.bridges.enabled_names(),
            providers: self
                .services
                .provider_names()
                .into_iter()
                .map(|(kind, name)| (kind.to_string(), name))
                .collect(),
            loaded_resources: self.container.loaded_resources().to_vec(),
            parameters: self.container.parameter_names().len(),
            aliases: self.container.alias_names().len(),
        }
    }
}

/// Wire the messaging module from configuration
///
/// Uses the wiring resources embedded in the binary.
pub fn wire_messaging(config: MessagingConfig) -> Result<MessagingModule> {
    wire_messaging_with(config, &EmbeddedWiringCatalog::new())
}

/// Wire the messaging module using the given resource catalog
///
/// The pass runs synchronously in phases:
/// 1. Validate the configuration.
/// 2. Reject retired storage drivers before touching any wiring resource.
/// 3. Load the base wiring: driver resource, then services, forms, validator.
/// 4. Register available bridges and enable the configured ones.
/// 5. Copy configuration values into container parameters and aliases.
/// 6. Wire conditional bridges: the mandatory user directory bridge aborts
///    the pass when disabled; with it enabled only an untouched sentinel
///    recipient field type is overwritten. The paginator bridge is optional.
/// 7. Freeze the container and resolve the typed service set.
pub fn wire_messaging_with(
    config: MessagingConfig,
    catalog: &dyn WiringCatalog,
) -> Result<MessagingModule> {
    validate_messaging_config(&config)?;

    if config.driver == StorageDriver::Odm {
        return Err(Error::invalid_argument(format!(
            "Invalid storage driver \"{}\": document storage is no longer supported, use \"orm\" or \"custom\"",
            config.driver
        )));
    }

    let mut builder = ContainerBuilder::new();
    load_base_wiring(&mut builder, &config, catalog)?;

    let bridges = activate_bridges(&config)?;

    populate_container(&mut builder, &config);

    wire_bridges(&mut builder, &bridges, catalog)?;

    let container = builder.freeze();
    let services = resolve_messaging_services(&container)?;

    info!(
        driver = %config.driver,
        bridges = ?bridges.enabled_names(),
        resources = ?container.loaded_resources(),
        "Messaging module wired"
    );

    Ok(MessagingModule {
        config: Arc::new(config),
        container,
        bridges,
        services,
    })
}

/// Load the base wiring resources in their fixed order
fn load_base_wiring(
    builder: &mut ContainerBuilder,
    config: &MessagingConfig,
    catalog: &dyn WiringCatalog,
) -> Result<()> {
    let driver_resource = config.driver.resource_name();
    for name in [
        driver_resource.as_str(),
        RESOURCE_SERVICES,
        RESOURCE_FORMS,
        RESOURCE_VALIDATOR,
    ] {
        builder.merge_resource(catalog.load(name)?);
    }
    Ok(())
}

/// Register available bridges and enable the configured ones
///
/// Enabling an unavailable bridge fails with an error listing what is
/// actually available.
fn activate_bridges(config: &MessagingConfig) -> Result<BridgeRegistry> {
    let mut bridges = BridgeRegistry::new();
    let available = bridges.register_available();
    debug!(available = available, "Registered available bridges");

    for name in &config.bridges {
        bridges.enable(name)?;
        log_bridge_status(name, true);
    }
    Ok(bridges)
}

/// Copy configuration values into container parameters and aliases
///
/// Every entry is a 1:1 copy. No defaulting or rewriting happens here;
/// the only later rewrite is the sentinel replacement in bridge wiring.
fn populate_container(builder: &mut ContainerBuilder, config: &MessagingConfig) {
    // Theme
    builder.set_parameter(PARAM_FORM_THEME, config.theme.as_str());

    // Models
    builder.set_parameter(PARAM_MESSAGE_CLASS, config.models.message_class.as_str());
    builder.set_parameter(
        PARAM_MESSAGE_METADATA_CLASS,
        config.models.message_metadata_class.as_str(),
    );
    builder.set_parameter(PARAM_THREAD_CLASS, config.models.thread_class.as_str());
    builder.set_parameter(
        PARAM_THREAD_METADATA_CLASS,
        config.models.thread_metadata_class.as_str(),
    );

    // Services
    for kind in ServiceKind::ALL {
        builder.set_alias(service_alias(kind), config.services.id_for(kind));
    }

    // Fields
    builder.set_parameter(PARAM_FIELD_TYPE_RECIPIENT, config.fields.recipient.as_str());
    builder.set_parameter(PARAM_FIELD_TYPE_SUBJECT, config.fields.subject.as_str());
    builder.set_parameter(PARAM_FIELD_TYPE_CONTENT, config.fields.content.as_str());

    // Forms
    let new_thread = &config.forms.new_thread;
    builder.set_alias(ALIAS_NEW_THREAD_FORM_TYPE, new_thread.form_type.as_str());
    builder.set_alias(ALIAS_NEW_THREAD_FORM_FACTORY, new_thread.factory.as_str());
    builder.set_alias(ALIAS_NEW_THREAD_FORM_HANDLER, new_thread.handler.as_str());
    builder.set_parameter(PARAM_NEW_THREAD_FORM_NAME, new_thread.name.as_str());
    builder.set_parameter(PARAM_NEW_THREAD_FORM_MODEL, new_thread.model.as_str());

    let reply = &config.forms.reply;
    builder.set_alias(ALIAS_REPLY_FORM_TYPE, reply.form_type.as_str());
    builder.set_alias(ALIAS_REPLY_FORM_FACTORY, reply.factory.as_str());
    builder.set_alias(ALIAS_REPLY_FORM_HANDLER, reply.handler.as_str());
    builder.set_parameter(PARAM_REPLY_FORM_NAME, reply.name.as_str());
    builder.set_parameter(PARAM_REPLY_FORM_MODEL, reply.model.as_str());
}

/// Wire the conditional bridges
///
/// The user directory bridge is the mandatory one: the pass aborts whenever
/// it is not enabled, regardless of the recipient field type. With it
/// enabled, a sentinel recipient field type is replaced by the bridge's own
/// type and a custom type is left untouched. The paginator bridge
/// contributes its wiring when enabled and is silently skipped otherwise.
fn wire_bridges(
    builder: &mut ContainerBuilder,
    bridges: &BridgeRegistry,
    catalog: &dyn WiringCatalog,
) -> Result<()> {
    if bridges.is_enabled(BRIDGE_USER_DIRECTORY) {
        builder.merge_resource(catalog.load(RESOURCE_BRIDGE_USER_DIRECTORY)?);
        // Only the untouched sentinel is replaced
        if builder.parameter_str(PARAM_FIELD_TYPE_RECIPIENT) == Some(SENTINEL_FIELD_TYPE) {
            builder.set_parameter(PARAM_FIELD_TYPE_RECIPIENT, USER_DIRECTORY_RECIPIENT_TYPE);
        }
    } else {
        return Err(Error::missing_bridge(
            BRIDGE_USER_DIRECTORY,
            "implement your own recipient field type or enable the user directory bridge",
        ));
    }

    if bridges.is_enabled(BRIDGE_PAGINATOR) {
        builder.merge_resource(catalog.load(RESOURCE_BRIDGE_PAGINATOR)?);
    } else {
        log_bridge_status(BRIDGE_PAGINATOR, false);
    }
    Ok(())
}

/// Summary of a completed wiring pass
#[derive(Debug, Clone)]
pub struct WiringReport {
    /// Storage driver the module was wired for
    pub driver: String,

    /// Form theme template path
    pub theme: String,

    /// Bridges that ended up enabled
    pub enabled_bridges: Vec<String>,

    /// Provider name behind each service kind
    pub providers: Vec<(String, String)>,

    /// Wiring resources merged into the container, in load order
    pub loaded_resources: Vec<String>,

    /// Number of container parameters
    pub parameters: usize,

    /// Number of container aliases
    pub aliases: usize,
}

impl std::fmt::Display for WiringReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Messaging module wiring:")?;
        writeln!(f, "  Driver: {}", self.driver)?;
        writeln!(f, "  Theme: {}", self.theme)?;
        writeln!(f, "  Enabled bridges: {:?}", self.enabled_bridges)?;
        writeln!(f, "  Services:")?;
        for (kind, provider) in &self.providers {
            writeln!(f, "    {}: {}", kind, provider)?;
        }
        writeln!(f, "  Loaded resources: {:?}", self.loaded_resources)?;
        writeln!(
            f,
            "  Container: {} parameters, {} aliases",
            self.parameters, self.aliases
        )?;
        Ok(())
    }
}
