//! # Reconciler
//!
//! Lifecycle handlers reconciling the declared GitHub auth backend against
//! the live server, plus the presence checker they rely on.

pub mod lifecycle;
pub mod presence;

pub use lifecycle::{create, delete, read, update};
pub use presence::{config_endpoint, is_github_backend_present};

use thiserror::Error;

/// Failure of a lifecycle operation
///
/// Validation failures are rejected before any remote call; everything else
/// is a wrapped remote-communication error. Drift (the backend missing
/// during read) is not an error.
#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("invalid github auth backend configuration: {0}")]
    Validation(#[from] crate::resource::ValidationError),
    #[error(transparent)]
    Remote(#[from] anyhow::Error),
}
