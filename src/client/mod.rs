//! # Vault Client
//!
//! Capability trait over the Vault auth-mount API surface this controller
//! consumes, plus the REST implementation.
//!
//! The lifecycle handlers only ever see `dyn VaultAuthApi`, so tests can
//! substitute an in-memory server and the REST client stays swappable.

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod rest;

pub use rest::VaultRest;

/// Descriptor of one enabled auth mount, as returned by the mount listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthMount {
    /// Backend type (e.g. "github", "token", "approle")
    #[serde(rename = "type")]
    pub mount_type: String,
    /// Description recorded when the mount was enabled
    #[serde(default)]
    pub description: String,
    /// Server-assigned mount accessor
    #[serde(default)]
    pub accessor: Option<String>,
}

/// Vault operations consumed by the lifecycle handlers
///
/// Exactly the four calls the controller needs: list, enable, disable, and
/// the generic config write. All calls are synchronous request/response with
/// no internal retry; failures surface immediately.
#[async_trait]
pub trait VaultAuthApi: Send + Sync {
    /// List all enabled auth mounts, keyed by mount path with a trailing `/`
    async fn list_auth_mounts(&self) -> Result<HashMap<String, AuthMount>>;

    /// Enable an auth backend of `mount_type` at `path`
    async fn enable_auth_mount(
        &self,
        path: &str,
        mount_type: &str,
        description: &str,
    ) -> Result<()>;

    /// Disable the auth backend mounted at `path`
    ///
    /// The server discards the mount's configuration as part of disabling.
    async fn disable_auth_mount(&self, path: &str) -> Result<()>;

    /// Write a configuration payload to an arbitrary logical endpoint
    /// (e.g. `auth/github/config`)
    async fn write_config(&self, endpoint: &str, data: serde_json::Value) -> Result<()>;
}
