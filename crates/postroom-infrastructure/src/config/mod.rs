//! Configuration management
//!
//! Loads the messaging module configuration from TOML files and environment
//! variables, applies defaults, and validates every section before the
//! wiring pass consumes it.

pub mod loader;
pub mod types;

pub use loader::{validate_messaging_config, ConfigBuilder, ConfigLoader};
pub use types::*;
