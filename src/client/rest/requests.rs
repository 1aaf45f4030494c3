//! # Request Types
//!
//! Vault HTTP API request payloads.

use serde::Serialize;

use crate::resource::GithubAuthBackendSpec;

/// Payload for `POST /v1/sys/auth/{path}`
///
/// API Reference: https://developer.hashicorp.com/vault/api-docs/system/auth#enable-auth-method
#[derive(Debug, Serialize)]
pub struct EnableAuthRequest {
    /// Auth backend type to enable
    #[serde(rename = "type")]
    pub mount_type: String,
    /// Human-readable mount description
    pub description: String,
}

impl EnableAuthRequest {
    pub fn new(mount_type: &str, description: &str) -> Self {
        Self {
            mount_type: mount_type.to_string(),
            description: description.to_string(),
        }
    }
}

/// Payload for `POST /v1/auth/{path}/config`
///
/// `organization`, `base_url` and `bypass_github_mfa` are always written;
/// the remote API expects those keys present even when unset. `ttl` and
/// `max_ttl` are only written when explicitly declared; omission means
/// "leave the server default", not "write empty".
///
/// API Reference: https://developer.hashicorp.com/vault/api-docs/auth/github#configure-method
#[derive(Debug, Serialize)]
pub struct GithubConfigRequest {
    pub organization: String,
    pub base_url: String,
    pub bypass_github_mfa: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_ttl: Option<String>,
}

impl GithubConfigRequest {
    /// Marshal the declared configuration into the remote payload
    pub fn from_spec(spec: &GithubAuthBackendSpec) -> Self {
        Self {
            organization: spec.organization.clone(),
            base_url: spec.base_url.clone(),
            bypass_github_mfa: spec.bypass_github_mfa,
            ttl: spec.ttl.clone(),
            max_ttl: spec.max_ttl.clone(),
        }
    }
}
