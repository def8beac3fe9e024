//! # Postroom - Provider Implementations
//!
//! This crate contains the messaging service providers and optional-feature
//! bridges that register themselves into the `postroom-domain` registry
//! slices. Each service provider implements a port (trait) defined in
//! `postroom-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Services | `MessageComposer`, `MessageSender`, ... | Null |
//! | Bridges | availability probe | UserDirectory, Paginator |
//!
//! ## Feature Flags
//!
//! Bridges can be compiled out for builds without their companion
//! integration:
//!
//! ```toml
//! [dependencies]
//! postroom-providers = { version = "0.1", default-features = false, features = ["bridge-paginator"] }
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use postroom_providers::services::NullMessageSender;
//! ```

// Re-export postroom-domain types commonly used with providers
pub use postroom_domain::error::{Error, Result};
pub use postroom_domain::ports::services::{
    InboxProvider, MessageComposer, MessageSender, ThreadDeleter, ThreadReader, ThreadRemover,
    ThreadSearcher, ThreadUpdater,
};

/// Messaging service provider implementations
///
/// Implements the eight service ports for each provider backend.
pub mod services;

/// Optional-feature bridge registrations
///
/// Each compiled-in bridge submits an availability probe to the bridge
/// registry.
pub mod bridges;
