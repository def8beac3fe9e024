//! Configuration types module

pub mod logging;
pub mod messaging;

// Re-export main types
pub use logging::*;
pub use messaging::*;
