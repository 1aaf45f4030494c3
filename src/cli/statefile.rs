//! State file persistence
//!
//! The CLI records the applied resource (identifier plus spec) as JSON
//! between invocations, the way a declarative orchestrator records state.
//! The file is subordinate to the server: `status` resynchronizes it.

use std::path::Path;

use anyhow::{Context, Result};
use vault_auth_controller::resource::GithubAuthBackend;

/// Load the recorded resource, if a state file exists
pub fn load(path: &Path) -> Result<Option<GithubAuthBackend>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read state file {}", path.display()))?;
    let backend = serde_json::from_str(&contents)
        .with_context(|| format!("State file {} is not valid JSON", path.display()))?;

    Ok(Some(backend))
}

/// Persist the resource to the state file
pub fn save(path: &Path, backend: &GithubAuthBackend) -> Result<()> {
    let contents =
        serde_json::to_string_pretty(backend).context("Failed to serialize resource state")?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write state file {}", path.display()))?;

    Ok(())
}

/// Remove the state file after a destroy
pub fn remove(path: &Path) -> Result<()> {
    if path.exists() {
        std::fs::remove_file(path)
            .with_context(|| format!("Failed to remove state file {}", path.display()))?;
    }

    Ok(())
}
