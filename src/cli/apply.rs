//! Apply command
//!
//! Reads a declared spec file, diffs it against the recorded state, and
//! creates, updates, or replaces the backend accordingly.

use std::path::Path;

use anyhow::{Context, Result};
use vault_auth_controller::client::VaultRest;
use vault_auth_controller::config::VaultConfig;
use vault_auth_controller::reconciler;
use vault_auth_controller::resource::{
    github_auth_backend_definition, validate_spec, GithubAuthBackend, GithubAuthBackendSpec,
    ResourceDefinition,
};

use crate::statefile;

/// Apply the declared configuration
pub async fn run(file: &Path, state_path: &Path) -> Result<()> {
    let contents = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read spec file {}", file.display()))?;
    let declared: GithubAuthBackendSpec = serde_yaml::from_str(&contents)
        .with_context(|| format!("Spec file {} is not a valid backend spec", file.display()))?;
    validate_spec(&declared)?;

    let config = VaultConfig::from_env()?;
    let client = VaultRest::new(&config)?;
    let definition = github_auth_backend_definition();

    let backend = match statefile::load(state_path)? {
        Some(mut existing) if existing.exists() => {
            if force_new_change(&definition, &existing.spec, &declared) {
                println!("► replacing github auth backend at {}", existing.id());
                reconciler::delete(&mut existing, &client).await?;

                let mut fresh = GithubAuthBackend::new(declared);
                reconciler::create(&mut fresh, &client).await?;
                fresh
            } else {
                println!("► updating github auth backend at {}", existing.id());
                existing.spec = declared;
                reconciler::update(&mut existing, &client).await?;
                existing
            }
        }
        _ => {
            println!("► creating github auth backend at {}", declared.path);
            let mut fresh = GithubAuthBackend::new(declared);
            reconciler::create(&mut fresh, &client).await?;
            fresh
        }
    };

    statefile::save(state_path, &backend)?;
    println!("✔ github auth backend applied at {}", backend.id());

    Ok(())
}

/// Whether any force-new field differs between the recorded and declared spec
fn force_new_change(
    definition: &ResourceDefinition,
    recorded: &GithubAuthBackendSpec,
    declared: &GithubAuthBackendSpec,
) -> bool {
    definition.force_new_fields().any(|field| match field {
        "path" => recorded.path != declared.path,
        "description" => recorded.description != declared.description,
        _ => false,
    })
}
