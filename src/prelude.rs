//! # Prelude
//!
//! Re-exports commonly used types and traits for convenience.
//!
//! ```rust
//! use vault_auth_controller::prelude::*;
//! ```

// Resource types - declared schema, state, validation
pub use crate::resource::{
    github_auth_backend_definition, FieldSchema, GithubAuthBackend, GithubAuthBackendSpec,
    ResourceDefinition, ValidationError,
};

// Client - capability trait and the REST implementation
pub use crate::client::{AuthMount, VaultAuthApi, VaultRest};

// Lifecycle handlers and presence checker
pub use crate::reconciler::{
    create, delete, is_github_backend_present, read, update, ReconcileError,
};

// Configuration
pub use crate::config::VaultConfig;
