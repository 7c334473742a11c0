//! Axum Starter - A minimal API scaffold
//!
//! This crate provides a small but production-shaped foundation for building
//! REST APIs with Axum: an environment-driven configuration loader and a
//! single JSON endpoint.
//!
//! # Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration (defaults, env file, environment)
//! - **api**: HTTP handlers, extractors, and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Print the resolved configuration
//! cargo run -- config
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::{ConfigError, LogLevel, Settings};
pub use errors::{AppError, AppResult};
