//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// envconf - environment-scoped endpoint configuration
#[derive(Parser, Debug)]
#[command(name = "envconf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the resolved configuration for an environment
    Show(ShowArgs),

    /// Validate the effective configuration table
    Check,

    /// List the valid environment selectors
    Environments,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Environment selector (mock, staging, production)
    #[arg(short, long, env = "APP_ENV")]
    pub env: Option<String>,

    /// Print the API key instead of redacting it
    #[arg(long)]
    pub reveal_key: bool,
}
