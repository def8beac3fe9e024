//! Catalog wrappers for observing the wiring pass

use postroom_domain::error::{Error, Result};
use postroom_infrastructure::wiring::{EmbeddedWiringCatalog, WiringCatalog, WiringResource};
use std::sync::Mutex;

/// Catalog recording every load request in order, serving the embedded resources
#[derive(Default)]
pub struct RecordingCatalog {
    inner: EmbeddedWiringCatalog,
    loads: Mutex<Vec<String>>,
}

impl RecordingCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The resource names requested so far, in request order
    pub fn loads(&self) -> Vec<String> {
        self.loads.lock().unwrap().clone()
    }
}

impl WiringCatalog for RecordingCatalog {
    fn load(&self, name: &str) -> Result<WiringResource> {
        self.loads.lock().unwrap().push(name.to_string());
        self.inner.load(name)
    }
}

/// Catalog failing on one chosen resource, serving the embedded ones otherwise
pub struct FailingCatalog {
    fail_on: &'static str,
}

impl FailingCatalog {
    pub fn new(fail_on: &'static str) -> Self {
        Self { fail_on }
    }
}

impl WiringCatalog for FailingCatalog {
    fn load(&self, name: &str) -> Result<WiringResource> {
        if name == self.fail_on {
            return Err(Error::not_found(format!("wiring resource '{}'", name)));
        }
        EmbeddedWiringCatalog::new().load(name)
    }
}
