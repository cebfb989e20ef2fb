//! Configuration management for showparse.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. Project-local `showparse.toml` file
//! 3. User config `~/.config/showparse/config.toml`
//! 4. Built-in defaults (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::parser::Platform;

mod defaults;

pub use defaults::*;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Parser selection.
    pub parser: ParserConfig,

    /// Output rendering.
    pub output: OutputConfig,

    /// Logging.
    pub logging: LoggingConfig,

    /// REST transport.
    pub rest: RestConfig,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./showparse.toml` (project local)
    /// 2. `~/.config/showparse/config.toml` (user config)
    /// 3. Falls back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        if Path::new(DEFAULT_CONFIG_FILE).exists() {
            return Self::from_file(DEFAULT_CONFIG_FILE);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_USER_CONFIG_FILE);
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        config.apply_env_overrides()?;

        Ok(config)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(platform) = std::env::var("SHOWPARSE_PLATFORM") {
            self.parser.platform = Some(platform.parse().map_err(ConfigError::Invalid)?);
        }

        if let Ok(format) = std::env::var("SHOWPARSE_OUTPUT_FORMAT") {
            self.output.format = match format.to_ascii_lowercase().as_str() {
                "json" => OutputFormat::Json,
                "yaml" | "yml" => OutputFormat::Yaml,
                other => {
                    return Err(ConfigError::Invalid(format!("unknown output format: {}", other)))
                }
            };
        }

        if let Ok(level) = std::env::var("SHOWPARSE_LOG") {
            self.logging.level = level;
        }

        if let Ok(url) = std::env::var("SHOWPARSE_REST_URL") {
            self.rest.base_url = Some(url);
        }
        if let Ok(username) = std::env::var("SHOWPARSE_REST_USERNAME") {
            self.rest.username = Some(username);
        }
        if let Ok(password) = std::env::var("SHOWPARSE_REST_PASSWORD") {
            self.rest.password = Some(password);
        }
        if let Ok(timeout) = std::env::var("SHOWPARSE_REST_TIMEOUT") {
            self.rest.timeout_secs = timeout
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("invalid REST timeout: {}", timeout)))?;
        }

        Ok(())
    }

    /// Create a default config file content as a string.
    pub fn default_config_string() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Parser selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Platform used when none is given on the command line.
    pub platform: Option<Platform>,
}

/// Rendering format for parsed trees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: "json" or "yaml".
    pub format: OutputFormat,

    /// Pretty-print JSON.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: DEFAULT_PRETTY,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (e.g. "info",
    /// "showparse_core=debug").
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// REST transport configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RestConfig {
    /// Base URL of the device API, e.g. `https://bigip.example.net`.
    pub base_url: Option<String>,

    /// User for basic authentication.
    pub username: Option<String>,

    /// Password. `SHOWPARSE_REST_PASSWORD` overrides it.
    #[serde(skip_serializing)]
    pub password: Option<String>,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Accept self-signed device certificates.
    pub accept_invalid_certs: bool,
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            username: Some(DEFAULT_REST_USERNAME.to_string()),
            password: None,
            timeout_secs: DEFAULT_REST_TIMEOUT_SECS,
            accept_invalid_certs: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.parser.platform, None);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.pretty);
        assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.rest.timeout_secs, DEFAULT_REST_TIMEOUT_SECS);
    }

    #[test]
    fn test_config_to_toml() {
        let toml_str = Config::default_config_string();
        assert!(toml_str.contains("[output]"));
        assert!(toml_str.contains("[logging]"));
        assert!(toml_str.contains("[rest]"));
        assert!(!toml_str.contains("password"));
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
[parser]
platform = "junos"

[output]
format = "yaml"
pretty = false

[rest]
base_url = "https://bigip.example.net"
timeout_secs = 5
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.parser.platform, Some(Platform::Junos));
        assert_eq!(config.output.format, OutputFormat::Yaml);
        assert!(!config.output.pretty);
        assert_eq!(config.rest.base_url.as_deref(), Some("https://bigip.example.net"));
        assert_eq!(config.rest.timeout_secs, 5);
        assert_eq!(config.rest.username.as_deref(), Some(DEFAULT_REST_USERNAME));
        assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_unknown_platform_is_rejected() {
        let toml_str = r#"
[parser]
platform = "nxos"
"#;
        assert!(toml::from_str::<Config>(toml_str).is_err());
    }
}
