//! # GithubAuthBackend Spec
//!
//! Declared configuration for a GitHub auth backend mount.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Declared configuration for a GitHub auth backend mount
///
/// This is the input the orchestrator hands to the lifecycle handlers.
///
/// # Example
///
/// ```yaml
/// path: github
/// description: GitHub login for the platform org
/// organization: octopilot
/// base_url: github.example.com
/// ttl: 1h
/// max_ttl: 24h
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct GithubAuthBackendSpec {
    /// Path to mount the backend under `auth/`
    /// Must not end with a path separator; changing it replaces the mount
    #[serde(default = "default_mount_path")]
    pub path: String,
    /// Human-readable description of the auth backend
    /// Immutable after creation; changing it replaces the mount
    #[serde(default)]
    pub description: String,
    /// The GitHub organization users must belong to
    /// This is the first part of the url https://XXX.github.com
    pub organization: String,
    /// GitHub host override for GitHub Enterprise deployments
    /// Examples: githubpreview.com, github.com (default)
    #[serde(default)]
    pub base_url: String,
    /// Skip the GitHub MFA requirement during login
    /// The key is always written to the remote config, even when unset
    #[serde(default)]
    pub bypass_github_mfa: bool,
    /// Duration after which authentication will be expired
    /// Omitted from the remote write when unset
    #[serde(default)]
    pub ttl: Option<String>,
    /// Maximum duration after which authentication will be expired
    /// Omitted from the remote write when unset
    #[serde(default)]
    pub max_ttl: Option<String>,
}

/// Default value for the mount path
pub fn default_mount_path() -> String {
    crate::constants::DEFAULT_MOUNT_PATH.to_string()
}
