//! Domain Port Interfaces
//!
//! Defines all boundary contracts between the messaging domain and the
//! layers that implement it. Ports follow the Dependency Inversion
//! Principle:
//! - High-level modules (domain) define interfaces
//! - Low-level modules (providers, infrastructure) implement them
//!
//! ## Organization
//!
//! - **services** - Messaging service ports (compose, send, read, delete, search)

/// Messaging service ports
pub mod services;

// Re-export commonly used port traits for convenience
pub use services::{
    InboxProvider, MessageComposer, MessageSender, ThreadDeleter, ThreadReader, ThreadRemover,
    ThreadSearcher, ThreadUpdater,
};
