//! Wiring resource catalog
//!
//! Wiring resources are TOML documents declaring the parameters and service
//! definitions a concern contributes to the container. The shipped resources
//! are embedded in the binary; the [`WiringCatalog`] trait is the seam tests
//! use to observe or substitute resource loading.

use crate::constants::*;
use crate::wiring::container::WiringResource;
use postroom_domain::error::{Error, Result};

/// Source of wiring resources for the wiring pass
pub trait WiringCatalog: Send + Sync {
    /// Load and parse the named wiring resource
    fn load(&self, name: &str) -> Result<WiringResource>;
}

/// Catalog serving the wiring resources embedded in the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedWiringCatalog;

impl EmbeddedWiringCatalog {
    /// Create the embedded catalog
    pub fn new() -> Self {
        Self
    }

    /// Names of every embedded wiring resource
    pub fn resource_names() -> [&'static str; 7] {
        [
            RESOURCE_DRIVER_ORM,
            RESOURCE_DRIVER_CUSTOM,
            RESOURCE_SERVICES,
            RESOURCE_FORMS,
            RESOURCE_VALIDATOR,
            RESOURCE_BRIDGE_USER_DIRECTORY,
            RESOURCE_BRIDGE_PAGINATOR,
        ]
    }

    fn raw(name: &str) -> Option<&'static str> {
        match name {
            RESOURCE_DRIVER_ORM => Some(include_str!("../../resources/config/drivers/orm.toml")),
            RESOURCE_DRIVER_CUSTOM => {
                Some(include_str!("../../resources/config/drivers/custom.toml"))
            }
            RESOURCE_SERVICES => Some(include_str!("../../resources/config/services.toml")),
            RESOURCE_FORMS => Some(include_str!("../../resources/config/forms.toml")),
            RESOURCE_VALIDATOR => Some(include_str!("../../resources/config/validator.toml")),
            RESOURCE_BRIDGE_USER_DIRECTORY => {
                Some(include_str!("../../resources/config/bridges/user_directory.toml"))
            }
            RESOURCE_BRIDGE_PAGINATOR => {
                Some(include_str!("../../resources/config/bridges/paginator.toml"))
            }
            _ => None,
        }
    }
}

impl WiringCatalog for EmbeddedWiringCatalog {
    fn load(&self, name: &str) -> Result<WiringResource> {
        let raw = Self::raw(name)
            .ok_or_else(|| Error::not_found(format!("wiring resource '{}'", name)))?;
        WiringResource::from_toml(name, raw)
    }
}
