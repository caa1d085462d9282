//! Command definitions and structures for the CLI

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "hookrelay")]
#[command(about = "Webhook-triggered build status relay with chat notifications")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding config.toml and per-repository overrides
    #[arg(long, global = true, env = "HOOKRELAY_CONFIG_ROOT")]
    pub config_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Process one hook event read as JSON from stdin
    Hook {
        /// Shell command run as the build action
        #[arg(short, long)]
        command: String,

        /// Dry run - print the pending message and exit
        #[arg(long)]
        dry_run: bool,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Send a test message to the configured chat room
    Test {
        /// Message to send
        message: String,

        /// Resolve configuration for this owner
        #[arg(long, requires = "repo")]
        owner: Option<String>,

        /// Resolve configuration for this repository
        #[arg(long, requires = "owner")]
        repo: Option<String>,
    },
}

/// Configuration inspection actions
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration for a repository
    Show {
        #[arg(long)]
        owner: String,

        #[arg(long)]
        repo: String,
    },
}
