//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `config` - Print the resolved configuration

pub mod args;

pub use args::{Cli, Commands};
