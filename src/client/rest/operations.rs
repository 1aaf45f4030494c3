//! # Auth Mount Operations
//!
//! Implementation of the `VaultAuthApi` trait for the Vault REST client.

use std::collections::HashMap;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Method;
use tracing::{debug, info};

use super::requests::EnableAuthRequest;
use super::responses::parse_auth_mounts;
use crate::client::rest::VaultRest;
use crate::client::{AuthMount, VaultAuthApi};

#[async_trait]
impl VaultAuthApi for VaultRest {
    async fn list_auth_mounts(&self) -> Result<HashMap<String, AuthMount>> {
        debug!("listing auth mounts from {}", self.address());

        let response = self
            .make_request(Method::GET, "sys/auth", None)
            .send()
            .await
            .context("Failed to list auth mounts")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(self
                .error_from_response(status, error_text)
                .context("Failed to list auth mounts"));
        }

        let body = response
            .json()
            .await
            .context("Failed to parse auth mount listing")?;
        parse_auth_mounts(body)
    }

    async fn enable_auth_mount(
        &self,
        path: &str,
        mount_type: &str,
        description: &str,
    ) -> Result<()> {
        info!("enabling {} auth backend at {}", mount_type, path);

        let enable_request = EnableAuthRequest::new(mount_type, description);
        let response = self
            .make_request(
                Method::POST,
                &format!("sys/auth/{path}"),
                Some(serde_json::to_value(&enable_request)?),
            )
            .send()
            .await
            .context("Failed to enable auth mount")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(self
                .error_from_response(status, error_text)
                .context(format!("Failed to enable auth mount at: {path}")));
        }

        Ok(())
    }

    async fn disable_auth_mount(&self, path: &str) -> Result<()> {
        info!("disabling auth backend at {}", path);

        let response = self
            .make_request(Method::DELETE, &format!("sys/auth/{path}"), None)
            .send()
            .await
            .context("Failed to disable auth mount")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(self
                .error_from_response(status, error_text)
                .context(format!("Failed to disable auth mount at: {path}")));
        }

        Ok(())
    }

    async fn write_config(&self, endpoint: &str, data: serde_json::Value) -> Result<()> {
        debug!("writing configuration to {}", endpoint);

        let response = self
            .make_request(Method::POST, endpoint, Some(data))
            .send()
            .await
            .context("Failed to write configuration")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(self
                .error_from_response(status, error_text)
                .context(format!("Failed to write configuration to: {endpoint}")));
        }

        Ok(())
    }
}
