//! # Controller Configuration
//!
//! Connection settings loaded from environment variables.

use anyhow::{Context, Result};

use crate::constants::{DEFAULT_VAULT_ADDR, ENV_VAULT_ADDR, ENV_VAULT_TOKEN};

/// Vault connection configuration
///
/// The address has a sensible default; the token is required and must be
/// supplied via `VAULT_TOKEN`.
#[derive(Debug, Clone)]
pub struct VaultConfig {
    /// Vault server address (e.g. `https://vault.example.com:8200`)
    pub address: String,
    /// Vault client token used for all API calls
    pub token: String,
}

impl VaultConfig {
    /// Load configuration from environment variables with defaults
    ///
    /// # Errors
    /// Returns an error if `VAULT_TOKEN` is unset or empty.
    pub fn from_env() -> Result<Self> {
        let address = env_var_or_default_str(ENV_VAULT_ADDR, DEFAULT_VAULT_ADDR);
        let token = std::env::var(ENV_VAULT_TOKEN)
            .ok()
            .filter(|t| !t.trim().is_empty())
            .with_context(|| format!("{ENV_VAULT_TOKEN} must be set to a non-empty Vault token"))?;

        Ok(Self {
            address: address.trim_end_matches('/').to_string(),
            token,
        })
    }
}

/// Read a string environment variable, falling back to a default
fn env_var_or_default_str(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_var_or_default_falls_back() {
        assert_eq!(
            env_var_or_default_str("VAULT_AUTH_CONTROLLER_UNSET_VAR", "fallback"),
            "fallback"
        );
    }
}
