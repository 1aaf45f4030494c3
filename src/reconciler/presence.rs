//! # Presence Checker
//!
//! Determines whether a GitHub auth backend is mounted at a given path.

use anyhow::{Context, Result};

use crate::client::VaultAuthApi;
use crate::constants::GITHUB_AUTH_TYPE;

/// Check whether a GitHub auth backend is mounted at exactly `path`
///
/// The server keys its mount listing with a trailing separator, so the input
/// path (which must not carry one) is normalized before the scan. A missing
/// mount is `Ok(false)`, never an error; only a failed listing errors.
pub async fn is_github_backend_present(client: &dyn VaultAuthApi, path: &str) -> Result<bool> {
    let mounts = client
        .list_auth_mounts()
        .await
        .context("error reading auth backends from Vault")?;

    let configured_path = format!("{path}/");

    for (mount_path, mount) in &mounts {
        if mount.mount_type == GITHUB_AUTH_TYPE && *mount_path == configured_path {
            return Ok(true);
        }
    }

    Ok(false)
}

/// Logical endpoint holding a GitHub backend's configuration sub-resource
pub fn config_endpoint(path: &str) -> String {
    format!("auth/{path}/config")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_endpoint_targets_the_mount() {
        assert_eq!(config_endpoint("github"), "auth/github/config");
        assert_eq!(config_endpoint("org/github"), "auth/org/github/config");
    }
}
