//! User directory bridge
//!
//! Connects messaging to the user directory integration: recipient fields
//! resolve display names against directory accounts instead of requiring raw
//! participant identifiers. The wiring pass treats this bridge as mandatory
//! and refuses to compose without it.

use postroom_domain::constants::BRIDGE_USER_DIRECTORY;
use postroom_domain::registry::{BRIDGES, BridgeEntry};

/// Whether the user directory companion is present in this build
///
/// Compiling this module in is what installs the companion, so the probe is
/// a constant. Builds without the integration exclude the whole entry via
/// the `bridge-user-directory` feature.
fn is_available() -> bool {
    true
}

#[linkme::distributed_slice(BRIDGES)]
static USER_DIRECTORY_BRIDGE: BridgeEntry = BridgeEntry {
    name: BRIDGE_USER_DIRECTORY,
    description: "Recipient selection backed by the user directory",
    probe: is_available,
};
