//! Integration tests for the settings loader.
//!
//! Process environment is global state, so every test that touches it runs
//! under a shared lock and cleans up the variables it set.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use once_cell::sync::Lazy;

use axum_starter::config::{get_settings, reset_settings, LogLevel, Settings};

// =============================================================================
// Test Helpers
// =============================================================================

/// Serializes all env-mutating tests in this binary.
static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// Recognized settings keys, cleared before each test run.
const KEYS: &[&str] = &[
    "APP_NAME",
    "DEBUG",
    "LOG_LEVEL",
    "DATABASE_URL",
    "API_HOST",
    "API_PORT",
    "API_KEY",
    "SECRET_KEY",
];

/// Run `f` with exactly `vars` set in the process environment.
fn with_env<T>(vars: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    for key in KEYS {
        std::env::remove_var(key);
    }
    for (key, value) in vars {
        std::env::set_var(key, value);
    }

    let result = f();

    for (key, _) in vars {
        std::env::remove_var(key);
    }

    result
}

/// An env file path guaranteed not to exist, so only the process
/// environment and defaults apply.
fn no_env_file() -> &'static Path {
    Path::new(".env.does-not-exist")
}

fn load_env_only() -> Result<Settings, axum_starter::ConfigError> {
    Settings::load_from(no_env_file())
}

/// Write a throwaway env file and return its path.
fn write_env_file(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "axum-starter-{}-{}.env",
        name,
        std::process::id()
    ));
    std::fs::write(&path, content).unwrap();
    path
}

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn default_values_apply_with_empty_environment() {
    with_env(&[], || {
        let settings = load_env_only().unwrap();

        assert_eq!(settings.app_name, "axum-starter");
        assert!(!settings.debug);
        assert_eq!(settings.log_level, LogLevel::Info);
        assert_eq!(settings.database_url, "sqlite:///./app.db");
        assert_eq!(settings.api_host, "localhost");
        assert_eq!(settings.api_port, 8000);
        assert_eq!(settings.api_key, "");
        assert_eq!(settings.secret_key, "dev-secret-key");
    });
}

// =============================================================================
// Environment Variable Overrides
// =============================================================================

#[test]
fn environment_variables_override_defaults() {
    with_env(
        &[
            ("APP_NAME", "test-app"),
            ("DEBUG", "true"),
            ("LOG_LEVEL", "DEBUG"),
            ("API_PORT", "3000"),
        ],
        || {
            let settings = load_env_only().unwrap();

            assert_eq!(settings.app_name, "test-app");
            assert!(settings.debug);
            assert_eq!(settings.log_level, LogLevel::Debug);
            assert_eq!(settings.api_port, 3000);
        },
    );
}

#[test]
fn environment_variable_names_are_case_insensitive() {
    with_env(
        &[
            ("debug", "true"),
            ("LOG_level", "WARNING"),
            ("Api_Port", "9000"),
        ],
        || {
            let settings = load_env_only().unwrap();

            assert!(settings.debug);
            assert_eq!(settings.log_level, LogLevel::Warning);
            assert_eq!(settings.api_port, 9000);
        },
    );
}

#[test]
fn partial_override_keeps_remaining_defaults() {
    with_env(&[("DEBUG", "true"), ("API_PORT", "9999")], || {
        let settings = load_env_only().unwrap();

        assert!(settings.debug);
        assert_eq!(settings.api_port, 9999);

        assert_eq!(settings.app_name, "axum-starter");
        assert_eq!(settings.log_level, LogLevel::Info);
        assert_eq!(settings.api_host, "localhost");
    });
}

#[test]
fn unknown_keys_are_ignored() {
    with_env(&[("UNKNOWN_FIELD", "should-be-ignored")], || {
        let settings = load_env_only().unwrap();
        assert_eq!(settings.app_name, "axum-starter");
    });
}

// =============================================================================
// Coercion & Validation Failures
// =============================================================================

#[test]
fn out_of_range_ports_fail_construction() {
    for raw in ["0", "-1", "65536", "70000"] {
        with_env(&[("API_PORT", raw)], || {
            let err = load_env_only().unwrap_err();
            assert_eq!(err.field, "api_port", "raw = {raw}");
            assert!(err.reason.contains("between"), "raw = {raw}");
        });
    }
}

#[test]
fn non_integer_port_fails_construction() {
    with_env(&[("API_PORT", "not-a-number")], || {
        let err = load_env_only().unwrap_err();
        assert_eq!(err.field, "api_port");
    });
}

#[test]
fn invalid_log_level_fails_construction() {
    with_env(&[("LOG_LEVEL", "INVALID")], || {
        let err = load_env_only().unwrap_err();
        assert_eq!(err.field, "log_level");
    });
}

#[test]
fn invalid_boolean_fails_construction() {
    with_env(&[("DEBUG", "maybe")], || {
        let err = load_env_only().unwrap_err();
        assert_eq!(err.field, "debug");
    });
}

#[test]
fn boolean_forms_coerce_from_environment() {
    let cases = [
        ("true", true),
        ("True", true),
        ("TRUE", true),
        ("1", true),
        ("on", true),
        ("yes", true),
        ("false", false),
        ("False", false),
        ("FALSE", false),
        ("0", false),
        ("off", false),
        ("no", false),
    ];

    for (raw, expected) in cases {
        with_env(&[("DEBUG", raw)], || {
            let settings = load_env_only().unwrap();
            assert_eq!(settings.debug, expected, "raw = {raw}");
        });
    }
}

// =============================================================================
// String Handling
// =============================================================================

#[test]
fn whitespace_in_string_values_is_preserved() {
    with_env(
        &[("APP_NAME", "  test-app  "), ("API_KEY", "\ttest-key\n")],
        || {
            let settings = load_env_only().unwrap();

            assert_eq!(settings.app_name, "  test-app  ");
            assert_eq!(settings.api_key, "\ttest-key\n");
        },
    );
}

#[test]
fn empty_string_values_are_accepted() {
    with_env(&[("API_KEY", ""), ("SECRET_KEY", "")], || {
        let settings = load_env_only().unwrap();

        assert_eq!(settings.api_key, "");
        assert_eq!(settings.secret_key, "");
    });
}

// =============================================================================
// Env File Loading
// =============================================================================

#[test]
fn env_file_values_override_defaults() {
    let path = write_env_file(
        "file-load",
        "APP_NAME=env-test-app\nDEBUG=true\nLOG_LEVEL=ERROR\nAPI_PORT=5000\nSECRET_KEY=test-secret\n",
    );

    with_env(&[], || {
        let settings = Settings::load_from(&path).unwrap();

        assert_eq!(settings.app_name, "env-test-app");
        assert!(settings.debug);
        assert_eq!(settings.log_level, LogLevel::Error);
        assert_eq!(settings.api_port, 5000);
        assert_eq!(settings.secret_key, "test-secret");
    });

    std::fs::remove_file(path).unwrap();
}

#[test]
fn process_environment_beats_env_file() {
    let path = write_env_file("file-precedence", "API_PORT=5000\nAPP_NAME=from-file\n");

    with_env(&[("API_PORT", "6000")], || {
        let settings = Settings::load_from(&path).unwrap();

        // Env wins where both are set; the file still applies elsewhere
        assert_eq!(settings.api_port, 6000);
        assert_eq!(settings.app_name, "from-file");
    });

    std::fs::remove_file(path).unwrap();
}

#[test]
fn unknown_keys_in_env_file_are_ignored() {
    let path = write_env_file(
        "file-unknown-keys",
        "UNKNOWN_FIELD=should-be-ignored\nAPP_NAME=from-file\n",
    );

    with_env(&[], || {
        let settings = Settings::load_from(&path).unwrap();

        assert_eq!(settings.app_name, "from-file");
        assert_eq!(settings.api_port, 8000);
    });

    std::fs::remove_file(path).unwrap();
}

#[test]
fn later_duplicate_key_in_env_file_wins() {
    let path = write_env_file("file-duplicate-keys", "API_PORT=5000\nAPI_PORT=7000\n");

    with_env(&[], || {
        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.api_port, 7000);
    });

    std::fs::remove_file(path).unwrap();
}

#[test]
fn missing_env_file_is_not_an_error() {
    with_env(&[], || {
        let settings = Settings::load_from(Path::new("/nonexistent/path/.env")).unwrap();
        assert_eq!(settings.app_name, "axum-starter");
    });
}

// =============================================================================
// Cached Singleton
// =============================================================================

#[test]
fn settings_accessor_caches_the_snapshot() {
    with_env(&[], || {
        reset_settings();

        let first = get_settings().unwrap();
        let second = get_settings().unwrap();
        assert!(std::sync::Arc::ptr_eq(&first, &second));

        reset_settings();

        let third = get_settings().unwrap();
        assert!(!std::sync::Arc::ptr_eq(&first, &third));

        reset_settings();
    });
}
