//! Destroy command
//!
//! Disables the recorded backend and clears the state file.

use std::path::Path;

use anyhow::Result;
use vault_auth_controller::client::VaultRest;
use vault_auth_controller::config::VaultConfig;
use vault_auth_controller::reconciler;

use crate::statefile;

/// Tear down the recorded backend
pub async fn run(state_path: &Path) -> Result<()> {
    let Some(mut backend) = statefile::load(state_path)? else {
        println!("nothing to destroy: no state file at {}", state_path.display());
        return Ok(());
    };

    if !backend.exists() {
        println!("nothing to destroy: recorded backend is already absent");
        statefile::remove(state_path)?;
        return Ok(());
    }

    let config = VaultConfig::from_env()?;
    let client = VaultRest::new(&config)?;

    println!("► destroying github auth backend at {}", backend.id());
    reconciler::delete(&mut backend, &client).await?;
    statefile::remove(state_path)?;
    println!("✔ github auth backend destroyed");

    Ok(())
}
