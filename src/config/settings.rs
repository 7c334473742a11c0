//! Application settings loaded from defaults, an optional env file, and
//! process environment variables.
//!
//! Precedence, lowest to highest: hardcoded defaults, env file, process
//! environment. Key matching is case-insensitive in both sources; unknown
//! keys are ignored. String values are taken verbatim (whitespace preserved),
//! while booleans, integers, and the log level are coerced and validated.

use std::env;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;
use thiserror::Error;

use super::constants::{
    DEFAULT_API_HOST, DEFAULT_API_KEY, DEFAULT_API_PORT, DEFAULT_APP_NAME, DEFAULT_DATABASE_URL,
    DEFAULT_DEBUG, DEFAULT_ENV_FILE, DEFAULT_SECRET_KEY, MAX_PORT, MIN_PORT,
};

/// Error raised when a configuration value fails coercion or range validation.
///
/// Always names the offending field; construction never succeeds with a
/// partially-defaulted snapshot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid value for `{field}`: {reason}")]
pub struct ConfigError {
    /// Settings field that failed validation
    pub field: &'static str,
    /// Human-readable description of the violated constraint
    pub reason: String,
}

impl ConfigError {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Log verbosity levels accepted by `LOG_LEVEL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// Canonical spellings, in ascending verbosity cutoff order.
    pub const VALID_VALUES: &'static [&'static str] =
        &["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"];

    /// Directive understood by `tracing_subscriber::EnvFilter`.
    ///
    /// `tracing` has no level above `error`, so CRITICAL maps to `error`.
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error => "error",
            LogLevel::Critical => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARNING" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "CRITICAL" => Ok(LogLevel::Critical),
            other => Err(format!(
                "`{}` is not one of {}",
                other,
                Self::VALID_VALUES.join(", ")
            )),
        }
    }
}

/// Immutable application settings snapshot.
#[derive(Clone)]
pub struct Settings {
    /// Application name
    pub app_name: String,
    /// Debug mode
    pub debug: bool,
    /// Logging level
    pub log_level: LogLevel,
    /// Database connection URL
    pub database_url: String,
    /// API host
    pub api_host: String,
    /// API port (1-65535)
    pub api_port: u16,
    /// External API key (may be empty)
    pub api_key: String,
    /// Application secret key
    pub secret_key: String,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("app_name", &self.app_name)
            .field("debug", &self.debug)
            .field("log_level", &self.log_level)
            .field("database_url", &"[REDACTED]")
            .field("api_host", &self.api_host)
            .field("api_port", &self.api_port)
            .field("api_key", &"[REDACTED]")
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            debug: DEFAULT_DEBUG,
            log_level: LogLevel::Info,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            api_host: DEFAULT_API_HOST.to_string(),
            api_port: DEFAULT_API_PORT,
            api_key: DEFAULT_API_KEY.to_string(),
            secret_key: DEFAULT_SECRET_KEY.to_string(),
        }
    }
}

impl Settings {
    /// Load settings using the default env file path (`.env`).
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(DEFAULT_ENV_FILE))
    }

    /// Load settings, overlaying the given env file (if it exists) and then
    /// the process environment onto the hardcoded defaults.
    pub fn load_from(env_file: &Path) -> Result<Self, ConfigError> {
        let file_values = read_env_file(env_file);
        let get = |key: &str| lookup(&file_values, key);
        let defaults = Settings::default();

        Ok(Self {
            app_name: get("APP_NAME").unwrap_or(defaults.app_name),
            debug: match get("DEBUG") {
                Some(raw) => coerce_bool("debug", &raw)?,
                None => defaults.debug,
            },
            log_level: match get("LOG_LEVEL") {
                Some(raw) => raw
                    .parse::<LogLevel>()
                    .map_err(|reason| ConfigError::new("log_level", reason))?,
                None => defaults.log_level,
            },
            database_url: get("DATABASE_URL").unwrap_or(defaults.database_url),
            api_host: get("API_HOST").unwrap_or(defaults.api_host),
            api_port: match get("API_PORT") {
                Some(raw) => coerce_port("api_port", &raw)?,
                None => defaults.api_port,
            },
            api_key: get("API_KEY").unwrap_or(defaults.api_key),
            secret_key: get("SECRET_KEY").unwrap_or(defaults.secret_key),
        })
    }

    /// Get the full API bind address.
    pub fn api_addr(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}

/// Read key/value pairs from an env file without touching the process
/// environment. A missing or unreadable file yields no pairs.
fn read_env_file(path: &Path) -> Vec<(String, String)> {
    match dotenvy::from_path_iter(path) {
        Ok(iter) => iter.filter_map(Result::ok).collect(),
        Err(_) => Vec::new(),
    }
}

/// Case-insensitive lookup: process environment first, then the env file.
/// Within the file, later occurrences of a key win.
fn lookup(file_values: &[(String, String)], key: &str) -> Option<String> {
    if let Some((_, value)) = env::vars().find(|(k, _)| k.eq_ignore_ascii_case(key)) {
        return Some(value);
    }
    file_values
        .iter()
        .filter(|(k, _)| k.eq_ignore_ascii_case(key))
        .last()
        .map(|(_, v)| v.clone())
}

/// Coerce a raw string into a boolean.
///
/// Accepts `true`/`on`/`yes` and `false`/`off`/`no` in any letter case,
/// plus the literals `1` and `0`.
fn coerce_bool(field: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Ok(true),
        "false" | "0" | "off" | "no" => Ok(false),
        _ => Err(ConfigError::new(
            field,
            format!("`{raw}` is not a recognized boolean"),
        )),
    }
}

/// Coerce a raw string into a TCP port, enforcing the 1-65535 range.
fn coerce_port(field: &'static str, raw: &str) -> Result<u16, ConfigError> {
    let n: i64 = raw.parse().map_err(|_| {
        ConfigError::new(field, format!("`{raw}` is not a base-10 integer"))
    })?;
    if n < i64::from(MIN_PORT) || n > i64::from(MAX_PORT) {
        return Err(ConfigError::new(
            field,
            format!("port must be between {MIN_PORT} and {MAX_PORT}, got {n}"),
        ));
    }
    Ok(n as u16)
}

// =============================================================================
// Cached singleton
// =============================================================================

static SETTINGS: Lazy<Mutex<Option<Arc<Settings>>>> = Lazy::new(|| Mutex::new(None));

/// Return the process-wide settings snapshot, constructing it on first call
/// and reusing the same instance afterwards. Construction failures are not
/// cached, so a later call can succeed once the environment is fixed.
pub fn get_settings() -> Result<Arc<Settings>, ConfigError> {
    let mut cached = SETTINGS.lock().expect("settings cache lock poisoned");
    if let Some(settings) = cached.as_ref() {
        return Ok(Arc::clone(settings));
    }
    let settings = Arc::new(Settings::load()?);
    *cached = Some(Arc::clone(&settings));
    Ok(settings)
}

/// Construct settings from an explicit env file and install the result as
/// the cached snapshot.
pub fn init_settings_from(env_file: &Path) -> Result<Arc<Settings>, ConfigError> {
    let settings = Arc::new(Settings::load_from(env_file)?);
    let mut cached = SETTINGS.lock().expect("settings cache lock poisoned");
    *cached = Some(Arc::clone(&settings));
    Ok(settings)
}

/// Drop the cached snapshot so the next accessor call reconstructs it.
///
/// Intended for test isolation only, not production code paths.
pub fn reset_settings() {
    *SETTINGS.lock().expect("settings cache lock poisoned") = None;
}
