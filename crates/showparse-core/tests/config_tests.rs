use std::io::Write;
use std::sync::Mutex;

use showparse_core::config::{
    DEFAULT_LOG_LEVEL, DEFAULT_PRETTY, DEFAULT_REST_TIMEOUT_SECS, DEFAULT_REST_USERNAME,
};
use showparse_core::{Config, ConfigError, OutputFormat, Platform};

/// Serializes tests that read or write `SHOWPARSE_*` variables.
static ENV_LOCK: Mutex<()> = Mutex::new(());

const ENV_VARS: [&str; 7] = [
    "SHOWPARSE_PLATFORM",
    "SHOWPARSE_OUTPUT_FORMAT",
    "SHOWPARSE_LOG",
    "SHOWPARSE_REST_URL",
    "SHOWPARSE_REST_USERNAME",
    "SHOWPARSE_REST_PASSWORD",
    "SHOWPARSE_REST_TIMEOUT",
];

/// Run `f` with exactly `vars` set among the `SHOWPARSE_*` variables.
fn with_env<T>(vars: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    for name in ENV_VARS {
        std::env::remove_var(name);
    }
    for (name, value) in vars {
        std::env::set_var(name, value);
    }
    let result = f();
    for name in ENV_VARS {
        std::env::remove_var(name);
    }
    result
}

fn config_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.parser.platform, None);
    assert_eq!(config.output.format, OutputFormat::Json);
    assert_eq!(config.output.pretty, DEFAULT_PRETTY);
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert_eq!(config.rest.timeout_secs, DEFAULT_REST_TIMEOUT_SECS);
    assert_eq!(config.rest.username.as_deref(), Some(DEFAULT_REST_USERNAME));
}

#[test]
fn test_config_to_toml() {
    let toml_str = Config::default_config_string();
    assert!(toml_str.contains("[output]"));
    assert!(toml_str.contains("[logging]"));
    assert!(toml_str.contains("[rest]"));
}

#[test]
fn test_config_from_toml() {
    let toml_str = r#"
[parser]
platform = "junos"

[output]
format = "yaml"

[rest]
base_url = "https://bigip.example.net"
password = "secret"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.parser.platform, Some(Platform::Junos));
    assert_eq!(config.output.format, OutputFormat::Yaml);
    assert!(config.output.pretty);
    assert_eq!(config.rest.base_url.as_deref(), Some("https://bigip.example.net"));
    assert_eq!(config.rest.password.as_deref(), Some("secret"));

    let rendered = toml::to_string_pretty(&config).unwrap();
    assert!(!rendered.contains("secret"));
}

#[test]
fn test_from_file() {
    let file = config_file("[logging]\nlevel = \"showparse_core=debug\"\n");

    let config = with_env(&[], || Config::from_file(file.path())).unwrap();
    assert_eq!(config.logging.level, "showparse_core=debug");
}

#[test]
fn test_from_file_invalid_toml() {
    let file = config_file("[output\nformat = \n");

    let err = with_env(&[], || Config::from_file(file.path())).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn test_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = with_env(&[], || Config::from_file(dir.path().join("absent.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError(_)));
}

#[test]
fn test_env_overrides_file() {
    let file = config_file(
        r#"
[parser]
platform = "iosxe"

[output]
format = "json"

[logging]
level = "info"

[rest]
base_url = "https://file.example.net"
username = "file-user"
password = "from-file"
timeout_secs = 10
"#,
    );

    let config = with_env(
        &[
            ("SHOWPARSE_PLATFORM", "ios-xr"),
            ("SHOWPARSE_OUTPUT_FORMAT", "YAML"),
            ("SHOWPARSE_LOG", "showparse_core=trace"),
            ("SHOWPARSE_REST_URL", "https://env.example.net"),
            ("SHOWPARSE_REST_USERNAME", "env-user"),
            ("SHOWPARSE_REST_PASSWORD", "from-env"),
            ("SHOWPARSE_REST_TIMEOUT", "3"),
        ],
        || Config::from_file(file.path()),
    )
    .unwrap();

    assert_eq!(config.parser.platform, Some(Platform::Iosxr));
    assert_eq!(config.output.format, OutputFormat::Yaml);
    assert_eq!(config.logging.level, "showparse_core=trace");
    assert_eq!(config.rest.base_url.as_deref(), Some("https://env.example.net"));
    assert_eq!(config.rest.username.as_deref(), Some("env-user"));
    assert_eq!(config.rest.password.as_deref(), Some("from-env"));
    assert_eq!(config.rest.timeout_secs, 3);
}

#[test]
fn test_file_values_kept_without_env() {
    let file = config_file("[rest]\npassword = \"from-file\"\ntimeout_secs = 10\n");

    let config = with_env(&[], || Config::from_file(file.path())).unwrap();
    assert_eq!(config.rest.password.as_deref(), Some("from-file"));
    assert_eq!(config.rest.timeout_secs, 10);
}

#[test]
fn test_env_invalid_values() {
    let file = config_file("");

    for (name, value) in [
        ("SHOWPARSE_OUTPUT_FORMAT", "xml"),
        ("SHOWPARSE_PLATFORM", "nxos"),
        ("SHOWPARSE_REST_TIMEOUT", "soon"),
    ] {
        let err = with_env(&[(name, value)], || Config::from_file(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "{}={} gave {}", name, value, err);
    }
}
