//! # Response Types
//!
//! Vault HTTP API response parsing.

use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::client::AuthMount;

/// Vault API error response wrapper
///
/// Vault returns errors as a plain list of messages:
/// `{"errors": ["permission denied"]}`.
///
/// API Reference: https://developer.hashicorp.com/vault/api-docs#error-response
#[derive(Debug, Deserialize)]
pub struct VaultErrorResponse {
    /// Human-readable error messages
    pub errors: Vec<String>,
}

/// Parse the body of `GET /v1/sys/auth` into a mount map
///
/// Modern servers wrap the map in a `data` field and duplicate it at the top
/// level for compatibility; older servers return the bare map mixed with
/// bookkeeping keys (`request_id`, `lease_id`, ...). Both shapes are
/// accepted: prefer `data` when it is an object, otherwise scan the top
/// level for entries that look like mount descriptors.
pub(crate) fn parse_auth_mounts(body: Value) -> Result<HashMap<String, AuthMount>> {
    let entries = if let Some(Value::Object(data)) = body.get("data") {
        data.clone()
    } else {
        body.as_object()
            .context("auth mount listing is not a JSON object")?
            .clone()
    };

    let mut mounts = HashMap::new();
    for (key, value) in entries {
        if !key.ends_with('/') {
            continue;
        }
        let mount: AuthMount = serde_json::from_value(value)
            .with_context(|| format!("malformed auth mount descriptor at '{key}'"))?;
        mounts.insert(key, mount);
    }

    Ok(mounts)
}
