//! # Lifecycle Handlers
//!
//! Create, read, update and delete for the GitHub auth backend resource.
//!
//! The handlers follow the declarative contract: create enables the mount
//! and delegates to update, update writes the configuration and delegates to
//! read, read detects drift by clearing the identifier when the mount is
//! gone, delete disables the mount. The remote server is the source of
//! truth throughout; the local instance is resynchronized after every
//! mutation.

use anyhow::Context;
use tracing::{debug, info};

use crate::client::rest::GithubConfigRequest;
use crate::client::VaultAuthApi;
use crate::constants::GITHUB_AUTH_TYPE;
use crate::reconciler::presence::{config_endpoint, is_github_backend_present};
use crate::reconciler::ReconcileError;
use crate::resource::{validate_spec, GithubAuthBackend};

/// Enable the auth backend and populate its configuration
///
/// The identifier is assigned as soon as the mount is enabled, before the
/// configuration write is confirmed; a failed delegation leaves an enabled,
/// unconfigured mount recorded as existing.
pub async fn create(
    backend: &mut GithubAuthBackend,
    client: &dyn VaultAuthApi,
) -> Result<(), ReconcileError> {
    validate_spec(&backend.spec)?;

    let path = backend.spec.path.clone();
    debug!("writing auth backend {} to Vault", GITHUB_AUTH_TYPE);

    client
        .enable_auth_mount(&path, GITHUB_AUTH_TYPE, &backend.spec.description)
        .await
        .context("error enabling github auth backend in Vault")?;

    backend.set_id(&path);

    // A freshly enabled mount has no organization or TTL settings yet, so
    // creation is incomplete without the configuration write.
    update(backend, client).await
}

/// Write the declared configuration to the mount's config endpoint
pub async fn update(
    backend: &mut GithubAuthBackend,
    client: &dyn VaultAuthApi,
) -> Result<(), ReconcileError> {
    let path = backend.id().to_string();
    debug!("updating auth backend {} in Vault", path);

    let configuration = GithubConfigRequest::from_spec(&backend.spec);
    let payload = serde_json::to_value(&configuration)
        .context("error marshaling github auth backend configuration")?;

    client
        .write_config(&config_endpoint(&path), payload)
        .await
        .with_context(|| format!("error updating configuration in Vault for path {path}"))?;

    read(backend, client).await
}

/// Resynchronize the local instance with the server
///
/// A missing mount is drift, not an error: the identifier is cleared so the
/// orchestrator re-creates the backend on its next apply.
pub async fn read(
    backend: &mut GithubAuthBackend,
    client: &dyn VaultAuthApi,
) -> Result<(), ReconcileError> {
    let path = backend.id().to_string();
    debug!("reading auth backend {} from Vault", path);

    let present = is_github_backend_present(client, &path)
        .await
        .with_context(|| format!("unable to check auth backends in Vault for path {path}"))?;

    if !present {
        info!("auth backend {} no longer present, clearing identifier", path);
        backend.clear_id();
        return Ok(());
    }

    // Presence confirmed. Group and user bindings are a config sub-resource
    // this controller does not manage.
    Ok(())
}

/// Disable the mount, discarding its configuration server-side
pub async fn delete(
    backend: &mut GithubAuthBackend,
    client: &dyn VaultAuthApi,
) -> Result<(), ReconcileError> {
    let path = backend.id().to_string();
    debug!("deleting auth backend {} from Vault", path);

    client
        .disable_auth_mount(&path)
        .await
        .context("error disabling auth backend from Vault")?;

    Ok(())
}
