//! # Schema Generator
//!
//! Emits the declared-resource JSON schema as YAML, generated from the Rust
//! type definition.
//!
//! ## Usage
//!
//! ```bash
//! # Generate the schema
//! cargo run --bin schemagen > schema/github_auth_backend.yaml
//! ```
//!
//! The generated schema includes required fields and default values, so
//! orchestrator-side tooling can validate declared specs before an apply.

use anyhow::Result;
use vault_auth_controller::resource::GithubAuthBackendSpec;

fn main() -> Result<()> {
    let schema = schemars::schema_for!(GithubAuthBackendSpec);
    print!("{}", serde_yaml::to_string(&schema)?);

    Ok(())
}
