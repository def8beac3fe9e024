//! Bridge Registry
//!
//! Bridges are optional-feature adapters: each one names a companion
//! integration and carries a probe that reports whether that companion is
//! present in the current build. Compiled-in bridges register themselves via
//! `#[linkme::distributed_slice]`; the [`BridgeRegistry`] tracks, for one
//! wiring pass, which bridges probed available and which of those the
//! operator enabled.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Error, Result};

/// Registry entry for bridges
///
/// Each bridge registers itself with this entry using
/// `#[linkme::distributed_slice(BRIDGES)]`. The probe is a pure predicate:
/// same build, same answer, no side effects. An absent companion is a normal
/// `false`, never an error.
pub struct BridgeEntry {
    /// Unique bridge name (e.g., "user_directory", "paginator")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Availability probe for the companion integration
    pub probe: fn() -> bool,
}

// Auto-collection via linkme distributed slices - bridges submit entries at compile time
#[linkme::distributed_slice]
pub static BRIDGES: [BridgeEntry] = [..];

/// Look up a compiled-in bridge by name
pub fn find_bridge(name: &str) -> Option<&'static BridgeEntry> {
    BRIDGES.iter().find(|entry| entry.name == name)
}

/// List all compiled-in bridges
///
/// Returns a list of (name, description) tuples for all registered bridges.
/// Useful for CLI help and wiring reports.
pub fn list_bridges() -> Vec<(&'static str, &'static str)> {
    BRIDGES
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect()
}

/// Bridge Registry
///
/// Tracks bridge state for a single wiring pass. Population happens in two
/// steps: [`register_available`](Self::register_available) records every
/// bridge whose probe passes (available but not yet enabled), then
/// [`enable`](Self::enable) marks the bridges the operator asked for.
/// Enabling a name that never registered is a configuration error surfaced
/// immediately rather than at first use.
///
/// The registry lives for the wiring pass only; the frozen wiring output
/// records which bridges ended up enabled.
#[derive(Debug, Default)]
pub struct BridgeRegistry {
    /// Bridges whose probe reported the companion present (name -> description)
    available: BTreeMap<String, String>,
    /// Subset of available bridges the operator enabled
    enabled: BTreeSet<String>,
}

impl BridgeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Probe every compiled-in bridge and record the available ones
    ///
    /// Newly recorded bridges start disabled. Idempotent: probing again adds
    /// nothing new and disturbs no enabled state.
    pub fn register_available(&mut self) -> usize {
        self.register_available_from(&BRIDGES)
    }

    /// Probe an explicit set of bridge entries and record the available ones
    ///
    /// This is the seam tests use to substitute fake probes without touching
    /// the compiled-in catalog.
    pub fn register_available_from(&mut self, entries: &[BridgeEntry]) -> usize {
        let mut recorded = 0;
        for entry in entries {
            if (entry.probe)() {
                self.available
                    .insert(entry.name.to_string(), entry.description.to_string());
                recorded += 1;
            }
        }
        recorded
    }

    /// Whether a bridge registered as available
    pub fn is_available(&self, name: &str) -> bool {
        self.available.contains_key(name)
    }

    /// Mark a previously registered bridge as enabled
    ///
    /// # Errors
    /// Returns [`Error::UnknownBridge`] when `name` never registered as
    /// available, listing the bridges that did.
    pub fn enable(&mut self, name: &str) -> Result<()> {
        if !self.available.contains_key(name) {
            return Err(Error::unknown_bridge(name, self.available_names()));
        }
        self.enabled.insert(name.to_string());
        Ok(())
    }

    /// Whether a bridge is both registered and enabled
    ///
    /// Unknown names return `false`; this query never fails.
    pub fn is_enabled(&self, name: &str) -> bool {
        self.enabled.contains(name)
    }

    /// Names of all bridges that registered as available, sorted
    pub fn available_names(&self) -> Vec<String> {
        self.available.keys().cloned().collect()
    }

    /// Names of all enabled bridges, sorted
    pub fn enabled_names(&self) -> Vec<String> {
        self.enabled.iter().cloned().collect()
    }
}
