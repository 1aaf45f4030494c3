//! # Initialization
//!
//! Process initialization: rustls crypto provider setup and tracing.

use anyhow::Result;

/// Initialize the process runtime
///
/// Installs the rustls ring crypto provider (required for rustls 0.23+ when
/// no default provider is set via features; must run before any TLS use)
/// and a tracing subscriber honoring `RUST_LOG`.
pub fn init() -> Result<()> {
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("Failed to install rustls crypto provider"))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vault_auth_controller=info".into()),
        )
        .init();

    Ok(())
}
