//! Shared test helpers
//!
//! An in-memory Vault standing in for the real server: it tracks enabled
//! auth mounts and recorded config writes, and can be told to fail any one
//! of the four operations.

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use vault_auth_controller::client::{AuthMount, VaultAuthApi};

#[derive(Debug, Default)]
struct MockVaultState {
    mounts: HashMap<String, AuthMount>,
    config_writes: Vec<(String, Value)>,
    fail_list: bool,
    fail_enable: bool,
    fail_disable: bool,
    fail_write: bool,
}

/// In-memory Vault with per-operation failure injection
#[derive(Debug, Default)]
pub struct MockVault {
    state: Mutex<MockVaultState>,
}

impl MockVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an enabled auth mount (the key gets the server's trailing slash)
    pub fn with_mount(self, path: &str, mount_type: &str, description: &str) -> Self {
        self.state.lock().unwrap().mounts.insert(
            format!("{path}/"),
            AuthMount {
                mount_type: mount_type.to_string(),
                description: description.to_string(),
                accessor: Some(format!("auth_{mount_type}_0001")),
            },
        );
        self
    }

    pub fn failing_list(self) -> Self {
        self.state.lock().unwrap().fail_list = true;
        self
    }

    pub fn failing_enable(self) -> Self {
        self.state.lock().unwrap().fail_enable = true;
        self
    }

    pub fn failing_disable(self) -> Self {
        self.state.lock().unwrap().fail_disable = true;
        self
    }

    pub fn failing_write(self) -> Self {
        self.state.lock().unwrap().fail_write = true;
        self
    }

    /// Config writes recorded so far, in order
    pub fn config_writes(&self) -> Vec<(String, Value)> {
        self.state.lock().unwrap().config_writes.clone()
    }

    /// Whether a mount is currently enabled at `path`
    pub fn has_mount(&self, path: &str) -> bool {
        self.state
            .lock()
            .unwrap()
            .mounts
            .contains_key(&format!("{path}/"))
    }
}

#[async_trait]
impl VaultAuthApi for MockVault {
    async fn list_auth_mounts(&self) -> Result<HashMap<String, AuthMount>> {
        let state = self.state.lock().unwrap();
        if state.fail_list {
            return Err(anyhow::anyhow!("connection refused"));
        }
        Ok(state.mounts.clone())
    }

    async fn enable_auth_mount(
        &self,
        path: &str,
        mount_type: &str,
        description: &str,
    ) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_enable {
            return Err(anyhow::anyhow!("permission denied"));
        }
        state.mounts.insert(
            format!("{path}/"),
            AuthMount {
                mount_type: mount_type.to_string(),
                description: description.to_string(),
                accessor: Some(format!("auth_{mount_type}_0001")),
            },
        );
        Ok(())
    }

    async fn disable_auth_mount(&self, path: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_disable {
            return Err(anyhow::anyhow!("network error: connection reset"));
        }
        state.mounts.remove(&format!("{path}/"));
        Ok(())
    }

    async fn write_config(&self, endpoint: &str, data: Value) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_write {
            return Err(anyhow::anyhow!("internal server error"));
        }
        state.config_writes.push((endpoint.to_string(), data));
        Ok(())
    }
}
