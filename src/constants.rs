//! # Constants
//!
//! Shared constants used throughout the controller.
//!
//! These values represent reasonable defaults and can be overridden via
//! configuration or environment variables where applicable.

/// Auth backend type managed by this controller
pub const GITHUB_AUTH_TYPE: &str = "github";

/// Default mount path when the declared configuration does not set one
pub const DEFAULT_MOUNT_PATH: &str = "github";

/// Default Vault server address
pub const DEFAULT_VAULT_ADDR: &str = "http://127.0.0.1:8200";

/// Environment variable holding the Vault server address
pub const ENV_VAULT_ADDR: &str = "VAULT_ADDR";

/// Environment variable holding the Vault client token
pub const ENV_VAULT_TOKEN: &str = "VAULT_TOKEN";

/// Default state file written by the CLI between invocations
pub const DEFAULT_STATE_FILE: &str = "vault-auth.state.json";
