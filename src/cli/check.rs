//! Check command
//!
//! Verifies connectivity and permissions before an apply: the server must be
//! reachable and the token must be able to list auth mounts.

use anyhow::{Context, Result};
use vault_auth_controller::client::{VaultAuthApi, VaultRest};
use vault_auth_controller::config::VaultConfig;
use vault_auth_controller::constants::GITHUB_AUTH_TYPE;

/// Check the Vault connection
pub async fn run() -> Result<()> {
    println!("► checking configuration");
    let config = VaultConfig::from_env().context("connection configuration is incomplete")?;
    println!("✔ vault address: {}", config.address);

    println!("► checking connectivity");
    let client = VaultRest::new(&config)?;
    let mounts = client
        .list_auth_mounts()
        .await
        .context("cannot list auth mounts — verify VAULT_ADDR and VAULT_TOKEN")?;
    println!("✔ token can list auth mounts ({} enabled)", mounts.len());

    let github_mounts: Vec<_> = mounts
        .iter()
        .filter(|(_, mount)| mount.mount_type == GITHUB_AUTH_TYPE)
        .map(|(path, _)| path.trim_end_matches('/'))
        .collect();
    if github_mounts.is_empty() {
        println!("✔ no github auth backends enabled yet");
    } else {
        println!("✔ github auth backends: {}", github_mounts.join(", "));
    }

    println!("✅ all checks passed");

    Ok(())
}
