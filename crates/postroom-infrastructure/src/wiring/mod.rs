//! Wiring pass and service composition
//!
//! Turns a validated [`MessagingConfig`](crate::config::MessagingConfig)
//! into a frozen [`Container`] and a typed [`MessagingServices`] set.
//!
//! ## Composition Flow
//!
//! ```text
//!   MessagingConfig (validated)
//!          |
//!          v
//!   reject retired storage drivers
//!          |
//!          v
//!   load base wiring resources          drivers/<driver>.toml
//!   (parameters + service definitions)  services.toml, forms.toml,
//!          |                            validator.toml
//!          v
//!   activate bridges                    probe + enable by name
//!          |
//!          v
//!   populate container                  theme, models, service aliases,
//!   (1:1 copies from config)            field types, form wiring
//!          |
//!          v
//!   conditional bridge wiring           sentinel-guarded recipient type
//!          |
//!          v
//!   freeze -> resolve typed services -> MessagingModule
//! ```
//!
//! Any failure drops the container under construction: callers never see a
//! partially wired module.

pub mod bootstrap;
pub mod catalog;
pub mod container;
pub mod resolver;

pub use bootstrap::{wire_messaging, wire_messaging_with, MessagingModule, WiringReport};
pub use catalog::{EmbeddedWiringCatalog, WiringCatalog};
pub use container::{service_alias, Container, ContainerBuilder, ServiceDefinition, WiringResource};
pub use resolver::{
    list_available_providers, resolve_messaging_services, AvailableProviders, MessagingServices,
};
