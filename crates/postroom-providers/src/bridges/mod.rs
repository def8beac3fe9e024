//! Optional-Feature Bridge Registrations
//!
//! A bridge adapts the messaging module to a companion integration that may
//! or may not be part of the build. Each compiled-in bridge submits a
//! [`BridgeEntry`](postroom_domain::registry::BridgeEntry) whose probe
//! reports whether the companion is present; the wiring pass decides from
//! that whether to load the bridge's extra wiring.
//!
//! ## Available Bridges
//!
//! | Bridge | Feature | Description |
//! |--------|---------|-------------|
//! | `user_directory` | `bridge-user-directory` | Recipient selection against the user directory (mandatory for baseline installs) |
//! | `paginator` | `bridge-paginator` | Paginated thread listings (optional) |

#[cfg(feature = "bridge-paginator")]
pub mod paginator;
#[cfg(feature = "bridge-user-directory")]
pub mod user_directory;
