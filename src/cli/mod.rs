//! # VAUTHCTL CLI
//!
//! Command-line interface for the Vault Auth Controller.
//!
//! Drives the declarative lifecycle of a GitHub auth backend mount against a
//! Vault server: apply a declared spec, inspect drift, and tear the backend
//! down again. State between invocations is recorded in a local JSON file.
//!
//! ## Usage
//!
//! ```bash
//! # Apply a declared backend spec (create, update, or replace)
//! vauthctl apply -f backend.yaml
//!
//! # Show the recorded backend and detect drift
//! vauthctl status
//!
//! # Tear the backend down
//! vauthctl destroy
//!
//! # Verify connectivity and token permissions
//! vauthctl check
//!
//! # Use a non-default state file
//! vauthctl apply -f backend.yaml --state corp.state.json
//! ```
//!
//! Connection settings come from the environment: `VAULT_ADDR` (defaults to
//! `http://127.0.0.1:8200`) and `VAULT_TOKEN` (required).

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use vault_auth_controller::constants::DEFAULT_STATE_FILE;

mod apply;
mod check;
mod destroy;
mod statefile;
mod status;

/// Vault Auth Controller CLI
#[derive(Parser)]
#[command(name = "vauthctl")]
#[command(
    about = "Declarative lifecycle manager for a GitHub auth backend mount on Vault",
    long_about = None,
    after_help = "\
Examples:
  vauthctl apply -f backend.yaml
  vauthctl status
  vauthctl destroy --state corp.state.json
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// State file recording the applied backend
    #[arg(short, long, global = true, default_value = DEFAULT_STATE_FILE)]
    state: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a declared backend spec (create, update, or replace)
    Apply {
        /// Path to the declared spec file (YAML)
        #[arg(short, long, value_name = "FILE")]
        file: PathBuf,
    },
    /// Disable the recorded backend and clear the state file
    Destroy,
    /// Refresh the recorded backend against the server and report drift
    Status,
    /// Verify the server is reachable and the token can list auth mounts
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    vault_auth_controller::runtime::init()?;

    let cli = Cli::parse();
    match cli.command {
        Commands::Apply { file } => apply::run(&file, &cli.state).await,
        Commands::Destroy => destroy::run(&cli.state).await,
        Commands::Status => status::run(&cli.state).await,
        Commands::Check => check::run().await,
    }
}
