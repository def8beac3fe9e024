//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that turn configuration into a wired
//! messaging module.
//!
//! This layer owns the composition pass: it validates the operator's
//! configuration, loads the embedded wiring resources for the selected
//! storage driver, activates bridges, populates the read-only container,
//! and resolves the typed service set the application consumes. Service
//! implementations live in postroom-providers and are reached through the
//! registries declared in postroom-domain.
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML configuration with env overrides and validation |
//! | [`constants`] | Container keys, resource names, sentinel values |
//!
//! ### Composition
//! | Module | Description |
//! |--------|-------------|
//! | [`wiring`] | Wiring pass, container, catalog, typed resolution |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context extension methods for domain errors |

// Provider registrations must be linked into every binary using this layer
extern crate postroom_providers;

// Core infrastructure modules
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod wiring;

// Re-export commonly used types
pub use config::{ConfigBuilder, ConfigLoader, MessagingConfig, StorageDriver};
pub use error_ext::ErrorContext;
pub use wiring::{wire_messaging, wire_messaging_with, MessagingModule};
