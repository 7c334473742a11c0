//! Config command - Prints the resolved configuration.

use std::sync::Arc;

use crate::config::Settings;
use crate::errors::AppResult;

/// Execute the config command
///
/// Prints the settings snapshot in its redacted Debug form, so secrets
/// never reach the terminal.
pub async fn execute(settings: Arc<Settings>) -> AppResult<()> {
    println!("{:#?}", settings);
    Ok(())
}
