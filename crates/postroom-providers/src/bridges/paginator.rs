//! Paginator bridge
//!
//! Connects messaging to the pagination helper integration so inbox and
//! search listings come back page by page. Purely optional: installs
//! without it simply list threads unpaginated.

use postroom_domain::constants::BRIDGE_PAGINATOR;
use postroom_domain::registry::{BRIDGES, BridgeEntry};

/// Whether the pagination helper is present in this build
fn is_available() -> bool {
    true
}

#[linkme::distributed_slice(BRIDGES)]
static PAGINATOR_BRIDGE: BridgeEntry = BridgeEntry {
    name: BRIDGE_PAGINATOR,
    description: "Paginated thread listings",
    probe: is_available,
};
