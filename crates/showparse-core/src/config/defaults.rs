//! Default values for showparse configuration.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

// ============================================================================
// File Locations
// ============================================================================

/// Project-local configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "showparse.toml";

/// Directory under the user config dir (`~/.config/showparse/`).
pub const DEFAULT_CONFIG_DIR: &str = "showparse";

/// User configuration file name.
pub const DEFAULT_USER_CONFIG_FILE: &str = "config.toml";

// ============================================================================
// Output Defaults
// ============================================================================

/// Pretty-print JSON output by default.
pub const DEFAULT_PRETTY: bool = true;

// ============================================================================
// Logging Defaults
// ============================================================================

/// Default log level when `RUST_LOG` is not set.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// ============================================================================
// REST Defaults
// ============================================================================

/// Default HTTP timeout for REST transports, in seconds.
pub const DEFAULT_REST_TIMEOUT_SECS: u64 = 30;

/// Default REST user.
pub const DEFAULT_REST_USERNAME: &str = "admin";
