//! # Declared-Input Validation
//!
//! Validation of the declared configuration, run before any remote call.

use regex::Regex;
use thiserror::Error;

use crate::resource::spec::GithubAuthBackendSpec;

/// Rejection of a declared configuration
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("cannot write to a path ending in '/': '{path}'")]
    TrailingSeparator { path: String },
    #[error("mount path '{path}' may only contain letters, digits, '-', '_' and '/'")]
    InvalidPathCharacters { path: String },
    #[error("mount path cannot be empty")]
    EmptyPath,
    #[error("organization is required but is empty")]
    MissingOrganization,
}

/// Validate a mount path
///
/// Vault mount paths are slash-separated segments of letters, digits,
/// hyphens and underscores, and must not end in a separator. The server's
/// mount-list keys carry the trailing slash, the declared path does not.
pub fn validate_mount_path(path: &str) -> Result<(), ValidationError> {
    if path.is_empty() {
        return Err(ValidationError::EmptyPath);
    }
    if path.ends_with('/') {
        return Err(ValidationError::TrailingSeparator {
            path: path.to_string(),
        });
    }

    let path_regex = Regex::new(r"^[A-Za-z0-9_-]+(/[A-Za-z0-9_-]+)*$")
        .expect("mount path pattern is a valid regex");
    if !path_regex.is_match(path) {
        return Err(ValidationError::InvalidPathCharacters {
            path: path.to_string(),
        });
    }

    Ok(())
}

/// Validate a full declared configuration
pub fn validate_spec(spec: &GithubAuthBackendSpec) -> Result<(), ValidationError> {
    validate_mount_path(&spec.path)?;

    if spec.organization.trim().is_empty() {
        return Err(ValidationError::MissingOrganization);
    }

    Ok(())
}
