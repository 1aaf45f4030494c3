//! Status command
//!
//! Refreshes the recorded backend against the server and reports drift.

use std::path::Path;

use anyhow::Result;
use vault_auth_controller::client::VaultRest;
use vault_auth_controller::config::VaultConfig;
use vault_auth_controller::reconciler;

use crate::statefile;

/// Refresh and report the recorded backend
pub async fn run(state_path: &Path) -> Result<()> {
    let Some(mut backend) = statefile::load(state_path)? else {
        println!("no state file at {} — nothing applied yet", state_path.display());
        return Ok(());
    };

    if !backend.exists() {
        println!("recorded backend is absent — re-run apply to create it");
        return Ok(());
    }

    let config = VaultConfig::from_env()?;
    let client = VaultRest::new(&config)?;

    let path = backend.id().to_string();
    reconciler::read(&mut backend, &client).await?;

    if backend.exists() {
        println!("✔ github auth backend present at {}", path);
        println!("  organization: {}", backend.spec.organization);
        if !backend.spec.base_url.is_empty() {
            println!("  base_url:     {}", backend.spec.base_url);
        }
        if let Some(ttl) = &backend.spec.ttl {
            println!("  ttl:          {ttl}");
        }
        if let Some(max_ttl) = &backend.spec.max_ttl {
            println!("  max_ttl:      {max_ttl}");
        }
    } else {
        println!("✗ drift detected: no github auth backend at {}", path);
        println!("  identifier cleared — the next apply will re-create it");
    }

    statefile::save(state_path, &backend)?;

    Ok(())
}
