//! # Resource Types
//!
//! Declared schema, live state, and validation for the GitHub auth backend
//! resource.

pub mod definition;
pub mod spec;
pub mod state;
pub mod validation;

pub use definition::{github_auth_backend_definition, FieldSchema, ResourceDefinition};
pub use spec::GithubAuthBackendSpec;
pub use state::GithubAuthBackend;
pub use validation::{validate_mount_path, validate_spec, ValidationError};
