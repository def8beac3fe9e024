//! # Postroom
//!
//! A private messaging module with pluggable storage, bridges, and typed
//! service wiring.
//!
//! This crate is the public facade: it re-exports the layers and the
//! wiring entry point. Applications call [`wire_messaging`] once at
//! startup and hold on to the returned [`MessagingModule`].
//!
//! ## Features
//!
//! - **Threaded messaging services**: composing, sending, reading, and
//!   searching private message threads behind port traits
//! - **Pluggable providers**: implementations register themselves at
//!   compile time and are selected by configuration
//! - **Bridges**: optional companion integrations (user directory,
//!   paginator) that contribute wiring when enabled
//! - **Fail-fast composition**: one synchronous pass that either wires the
//!   whole module or reports exactly what is missing
//!
//! ## Example
//!
//! ```ignore
//! use postroom::{wire_messaging, MessagingConfig};
//!
//! let module = wire_messaging(MessagingConfig::default())?;
//! println!("{}", module.report());
//! ```
//!
//! ## Architecture
//!
//! The codebase follows Clean Architecture principles:
//!
//! - `domain` - Port traits, value objects, registries, and domain errors
//! - `providers` - Null service implementations and bridge registrations
//! - `infrastructure` - Configuration, logging, and the wiring pass

/// Domain layer - port traits, value objects, and registries
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use postroom_domain::*;
}

/// Provider implementations - null services and bridges
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use postroom_providers::*;
}

/// Infrastructure layer - configuration, logging, and wiring
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use postroom_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the wiring entry points at the crate root
pub use infrastructure::{wire_messaging, wire_messaging_with, MessagingModule};

// Re-export configuration types for convenience
pub use infrastructure::{ConfigBuilder, ConfigLoader, MessagingConfig, StorageDriver};
