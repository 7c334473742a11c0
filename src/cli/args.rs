//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// Axum Starter - Minimal API scaffold with environment-driven configuration
#[derive(Parser, Debug)]
#[command(name = "axum-starter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Env file path (defaults to `.env`)
    #[arg(long, global = true, env = "ENV_FILE")]
    pub env_file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Print the resolved configuration
    Config,
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to (defaults to the configured API host)
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on (defaults to the configured API port)
    #[arg(short, long)]
    pub port: Option<u16>,
}
