//! Axum Starter - Application entry point
//!
//! CLI-based entry point that dispatches to various commands.

use std::path::Path;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use axum_starter::{
    cli::{Cli, Commands},
    commands, config,
};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration; a validation failure is fatal
    let settings = match &cli.env_file {
        Some(path) => config::init_settings_from(Path::new(path)),
        None => config::get_settings(),
    };
    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose, &settings);
    tracing::debug!("Configuration loaded: {:?}", settings);

    // Execute command
    let result = match cli.command {
        Commands::Serve(args) => commands::serve::execute(args, settings).await,
        Commands::Config => commands::config::execute(settings).await,
    };

    // Handle errors
    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
///
/// Filter precedence: `--verbose`, then `RUST_LOG`, then the configured
/// log level.
fn init_tracing(verbose: bool, settings: &config::Settings) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| settings.log_level.as_filter_str().to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
