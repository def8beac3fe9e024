//! Domain layer constants
//!
//! Contains constants that are part of the domain contract and are shared by
//! the providers and infrastructure layers. Wiring-specific constants
//! (container keys, resource names) live in
//! `postroom_infrastructure::constants`.

// ============================================================================
// BRIDGE NAMES
// ============================================================================

/// Bridge providing recipient resolution against the user directory.
///
/// This bridge is mandatory for baseline functionality: the wiring pass
/// aborts when it is not enabled.
pub const BRIDGE_USER_DIRECTORY: &str = "user_directory";

/// Optional bridge providing paginated thread listings
pub const BRIDGE_PAGINATOR: &str = "paginator";

// ============================================================================
// SERVICE PROVIDER NAMES
// ============================================================================

/// Name under which the no-op service implementations register themselves
pub const PROVIDER_NULL: &str = "null";
