//! Overlay backend selection and the named portal registry.
//!
//! The core never mounts anything itself; it emits mount/unmount effects and
//! the embedding host realizes them against whichever backend is configured.

use rustc_hash::FxHashMap;
use tracing::warn;

/// Which overlay layer the bubble subtree is mounted into.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OverlayBackend {
    /// A named portal layer registered by the embedding app; content escapes
    /// its parent's clipping bounds by rendering into the host's subtree.
    Portal { host: String },
    /// A dedicated full-viewport layer above the normal tree.
    #[default]
    FullWindow,
    /// The host framework's modal primitive.
    Modal,
}

impl OverlayBackend {
    pub fn portal(host: impl Into<String>) -> Self {
        Self::Portal { host: host.into() }
    }
}

/// Registry of named portal hosts, keyed by the name a tooltip's
/// [`OverlayBackend::Portal`] refers to. `H` is whatever handle the
/// embedding framework uses for a mounted layer.
#[derive(Debug)]
pub struct PortalRegistry<H> {
    hosts: FxHashMap<String, H>,
}

impl<H> Default for PortalRegistry<H> {
    fn default() -> Self {
        Self {
            hosts: FxHashMap::default(),
        }
    }
}

impl<H> PortalRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a host layer, returning the previously registered handle
    /// under the same name, if any.
    pub fn register(&mut self, name: impl Into<String>, host: H) -> Option<H> {
        let name = name.into();
        let previous = self.hosts.insert(name.clone(), host);
        if previous.is_some() {
            warn!(%name, "portal host re-registered, replacing previous layer");
        }
        previous
    }

    pub fn unregister(&mut self, name: &str) -> Option<H> {
        self.hosts.remove(name)
    }

    /// Resolves the host layer a backend renders into. Non-portal backends
    /// have no registry entry.
    pub fn resolve(&self, backend: &OverlayBackend) -> Option<&H> {
        match backend {
            OverlayBackend::Portal { host } => self.hosts.get(host.as_str()),
            OverlayBackend::FullWindow | OverlayBackend::Modal => None,
        }
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut H> {
        self.hosts.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.hosts.contains_key(name)
    }
}
