//! Test utilities for postroom-infrastructure integration tests
//!
//! Provides catalog wrappers that observe or fail resource loading so the
//! wiring pass can be exercised end to end.

pub mod recording;

pub use recording::*;
