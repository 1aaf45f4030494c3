//! Vault Auth Controller Library
//!
//! Declarative lifecycle management for a GitHub auth backend mount on a
//! HashiCorp Vault server: enable the mount, write its configuration,
//! detect drift, and tear it down again.
//!
//! ## Quick Start
//!
//! ```rust
//! use vault_auth_controller::prelude::*;
//! ```
//!
//! This brings commonly used types and traits into scope. For more specific
//! imports, use the individual modules.

// Re-export modules so they can be tested
pub mod client;
pub mod config;
pub mod constants;
pub mod prelude;
pub mod reconciler;
pub mod resource;
pub mod runtime;
