//! # Vault REST Client
//!
//! Native REST implementation of the [`VaultAuthApi`](crate::client::VaultAuthApi)
//! capability trait over the Vault HTTP API v1.
//!
//! Uses reqwest with rustls (no OpenSSL dependencies). The client carries no
//! retry, backoff, or caching logic; every call is a single request whose
//! failure is propagated to the caller.
//!
//! References:
//! - [Vault HTTP API: /sys/auth](https://developer.hashicorp.com/vault/api-docs/system/auth)
//! - [Vault HTTP API: GitHub auth method](https://developer.hashicorp.com/vault/api-docs/auth/github)

mod operations;
mod requests;
mod responses;

pub use requests::*;
pub use responses::*;

use anyhow::{Context, Result};
use reqwest::Client;

use crate::config::VaultConfig;

/// Vault REST client
pub struct VaultRest {
    http_client: Client,
    address: String,
    token: String,
}

impl std::fmt::Debug for VaultRest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultRest")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

impl VaultRest {
    /// Create a new Vault REST client from connection configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &VaultConfig) -> Result<Self> {
        let http_client = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http_client,
            address: config.address.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Build an HTTP request against the v1 API with authentication headers
    pub(crate) fn make_request(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> reqwest::RequestBuilder {
        let url = format!("{}/v1/{}", self.address, path.trim_start_matches('/'));

        let mut request = self
            .http_client
            .request(method, &url)
            .header("X-Vault-Token", &self.token)
            .header("Content-Type", "application/json");

        if let Some(body) = body {
            request = request.json(&body);
        }

        request
    }

    /// Turn a non-success Vault response into an error
    ///
    /// Vault reports failures as `{"errors": ["..."]}`; anything else falls
    /// back to the raw status and body.
    pub(crate) fn error_from_response(
        &self,
        status: reqwest::StatusCode,
        error_text: String,
    ) -> anyhow::Error {
        if let Ok(error_response) =
            serde_json::from_str::<responses::VaultErrorResponse>(&error_text)
        {
            if !error_response.errors.is_empty() {
                return anyhow::anyhow!(
                    "Vault API error (status {}): {}",
                    status.as_u16(),
                    error_response.errors.join("; ")
                );
            }
        }
        anyhow::anyhow!("HTTP {} (status: {}): {}", status.as_u16(), status, error_text)
    }

    /// The configured server address
    pub fn address(&self) -> &str {
        &self.address
    }
}
