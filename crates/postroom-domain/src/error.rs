//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Postroom messaging module
///
/// Every failure raised during the wiring pass is one of these variants.
/// None of them are retried: they all surface synchronously at startup so
/// misconfiguration is caught before the application serves any traffic.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related error (bad value, offending key named in message)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid argument provided to an operation (e.g. an unsupported driver)
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// A bridge was requested that was never registered as available
    #[error("Unknown bridge '{name}'. Available bridges: {available:?}")]
    UnknownBridge {
        /// The bridge name that was requested
        name: String,
        /// Names of the bridges that are actually available
        available: Vec<String>,
    },

    /// A mandatory bridge is not enabled
    #[error("Missing bridge '{name}': {hint}")]
    MissingBridge {
        /// The bridge that baseline functionality requires
        name: String,
        /// Instruction telling the operator how to proceed
        hint: String,
    },

    /// Resource not found error (wiring resource, service definition)
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// JSON conversion error
    #[error("JSON error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Internal invariant violation
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

// Bridge error creation methods
impl Error {
    /// Create an unknown bridge error
    pub fn unknown_bridge<S: Into<String>>(name: S, available: Vec<String>) -> Self {
        Self::UnknownBridge {
            name: name.into(),
            available,
        }
    }

    /// Create a missing bridge error
    pub fn missing_bridge<S: Into<String>, H: Into<String>>(name: S, hint: H) -> Self {
        Self::MissingBridge {
            name: name.into(),
            hint: hint.into(),
        }
    }
}

// Lookup and internal error creation methods
impl Error {
    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
