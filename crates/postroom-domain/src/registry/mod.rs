//! Provider Registry System
//!
//! Defines the auto-registration infrastructure for bridges and messaging
//! service providers. Uses the `linkme` crate for compile-time registration
//! of entries that can be discovered and instantiated at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Registration Flow                          │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(BRIDGES)]    │
//! │                        static ENTRY: BridgeEntry = ...          │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static BRIDGES: [BridgeEntry] = [..] │
//! │                              ↓                                  │
//! │  3. Wiring queries:    BRIDGES.iter()                           │
//! │                              ↓                                  │
//! │  4. Config selects:    bridges = ["user_directory"] → enabled   │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering a Bridge (in postroom-providers)
//!
//! ```ignore
//! use postroom_domain::registry::{BRIDGES, BridgeEntry};
//!
//! #[linkme::distributed_slice(BRIDGES)]
//! static USER_DIRECTORY_BRIDGE: BridgeEntry = BridgeEntry {
//!     name: "user_directory",
//!     description: "Recipient lookup backed by the user directory",
//!     probe: || true,
//! };
//! ```
//!
//! ### Resolving a Service Provider (in postroom-infrastructure)
//!
//! ```ignore
//! use postroom_domain::registry::{ServiceKind, ServiceProviderConfig, resolve_service_provider};
//!
//! let config = ServiceProviderConfig::new("null");
//! let instance = resolve_service_provider(ServiceKind::Sender, &config)?;
//! ```

pub mod bridges;
pub mod services;

// Re-export all registry types and functions
pub use bridges::{BRIDGES, BridgeEntry, BridgeRegistry, find_bridge, list_bridges};
pub use services::{
    SERVICE_PROVIDERS, ServiceInstance, ServiceKind, ServiceProviderConfig, ServiceProviderEntry,
    list_service_providers, resolve_service_provider,
};
