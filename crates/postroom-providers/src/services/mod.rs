//! Messaging Service Provider Implementations
//!
//! Provides backends for the eight messaging service ports.
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | Null | Testing | No-op stubs, also the wiring defaults |
//!
//! ## Provider Selection Guide
//!
//! - **Development/Testing**: Use the null providers for unit tests
//! - **Production**: A storage driver supplies real implementations and is
//!   selected per service via configuration

pub mod null;

// Re-export for convenience
pub use null::{
    NullInboxProvider, NullMessageComposer, NullMessageSender, NullThreadDeleter, NullThreadReader,
    NullThreadRemover, NullThreadSearcher, NullThreadUpdater,
};
