//! # Resource State
//!
//! Live state of one GitHub auth backend resource instance.

use serde::{Deserialize, Serialize};

use crate::resource::spec::GithubAuthBackendSpec;

/// One GitHub auth backend resource instance
///
/// The identifier equals the mount path once the backend has been enabled.
/// An empty identifier signals non-existence to the orchestrator; the remote
/// server is the source of truth and this struct is only a subordinate cache
/// of it, resynchronized by the read handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubAuthBackend {
    /// Persistent identifier; empty until the mount has been enabled
    id: String,
    /// Declared configuration this instance was applied from
    pub spec: GithubAuthBackendSpec,
}

impl GithubAuthBackend {
    /// A declared backend that does not exist on the server yet
    pub fn new(spec: GithubAuthBackendSpec) -> Self {
        Self {
            id: String::new(),
            spec,
        }
    }

    /// Rehydrate an instance from a persisted identifier and spec
    pub fn from_parts(id: String, spec: GithubAuthBackendSpec) -> Self {
        Self { id, spec }
    }

    /// The persistent identifier (the mount path), empty when absent
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether the orchestrator currently considers this resource to exist
    pub fn exists(&self) -> bool {
        !self.id.is_empty()
    }

    /// Assign the persistent identifier after a successful enable
    pub fn set_id(&mut self, id: &str) {
        self.id = id.to_string();
    }

    /// Mark the resource as not existing (drift detected during read)
    pub fn clear_id(&mut self) {
        self.id.clear();
    }
}
