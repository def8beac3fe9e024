//! Domain layer for the Postroom messaging module
//!
//! Defines everything the rest of the workspace agrees on: the error
//! taxonomy, the value objects exchanged with messaging services, the port
//! traits those services implement, and the linkme registries through which
//! implementations make themselves known.
//!
//! ## Layering
//!
//! This crate has no knowledge of configuration, wiring resources, or the
//! container. Providers depend on it to register entries into the registry
//! slices; the infrastructure crate depends on it (and on the providers) to
//! resolve those entries at composition time. The ordering is acyclic:
//!
//! ```text
//! postroom-domain  ←  postroom-providers  ←  postroom-infrastructure
//! ```

pub mod constants;
pub mod error;
pub mod ports;
pub mod registry;
pub mod value_objects;

// Re-export commonly used types at the crate root
pub use error::{Error, Result};
pub use ports::{
    InboxProvider, MessageComposer, MessageSender, ThreadDeleter, ThreadReader, ThreadRemover,
    ThreadSearcher, ThreadUpdater,
};
pub use value_objects::{OutboundMessage, ReplyDraft, ThreadDraft, ThreadSummary};
