//! Application configuration module
//!
//! Handles defaults, the optional env file, and environment variables.

mod constants;
mod settings;

pub use constants::*;
pub use settings::{
    get_settings, init_settings_from, reset_settings, ConfigError, LogLevel, Settings,
};
