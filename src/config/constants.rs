//! Application-wide constants
//!
//! Centralized location for default configuration values.

// =============================================================================
// Application
// =============================================================================

/// Default application name
pub const DEFAULT_APP_NAME: &str = "axum-starter";

/// Default debug flag
pub const DEFAULT_DEBUG: bool = false;

// =============================================================================
// Server Configuration
// =============================================================================

/// Default API host address
pub const DEFAULT_API_HOST: &str = "localhost";

/// Default API port
pub const DEFAULT_API_PORT: u16 = 8000;

/// Lowest valid TCP port
pub const MIN_PORT: u16 = 1;

/// Highest valid TCP port
pub const MAX_PORT: u16 = 65535;

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (for development)
pub const DEFAULT_DATABASE_URL: &str = "sqlite:///./app.db";

// =============================================================================
// Secrets
// =============================================================================

/// Default external API key (empty = unset)
pub const DEFAULT_API_KEY: &str = "";

/// Default application secret key (for development only)
pub const DEFAULT_SECRET_KEY: &str = "dev-secret-key";

// =============================================================================
// Environment file
// =============================================================================

/// Default env file path, relative to the working directory
pub const DEFAULT_ENV_FILE: &str = ".env";
