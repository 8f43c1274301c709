//! Server configuration loading from file and environment variables.

use hostline_dialog::FaqEntry;
use hostline_fallback::FallbackConfig;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use thiserror::Error;

/// Top-level server configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server network settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Transfer destination for agent requests. Optional: without one,
    /// agent requests get a spoken notice instead of a transfer.
    #[serde(default)]
    pub support_number: Option<String>,

    /// Generative-fallback collaborator settings.
    #[serde(default)]
    pub fallback: FallbackConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Optional FAQ entries replacing the builtin restaurant table.
    /// Order in the file is match precedence.
    #[serde(default)]
    pub faq: Option<Vec<FaqEntry>>,
}

/// Network configuration for the HTTP server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "hostline_server=debug,info").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to output logs in JSON format.
    #[serde(default)]
    pub json: bool,
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0))
}

fn default_port() -> u16 {
    5050
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Loads configuration from a TOML file, falling back to defaults.
///
/// Environment variable overrides:
/// - `HOSTLINE_HOST` overrides `server.host`
/// - `HOSTLINE_PORT` overrides `server.port`
/// - `SUPPORT_NUMBER` overrides `support_number`
/// - `OPENAI_API_KEY` overrides `fallback.api_key`
/// - `HOSTLINE_LOG_LEVEL` overrides `logging.level`
/// - `HOSTLINE_LOG_JSON` overrides `logging.json` (set to "true" to enable)
///
/// A missing file is not an error: the service runs fine on defaults,
/// and missing optional values (support number, API key) are valid
/// states handled at reply time.
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(contents) => toml::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = p, "config file not found, using defaults");
                Config::default()
            }
            Err(e) => return Err(ConfigError::FileRead(e)),
        },
        None => Config::default(),
    };

    // Environment variable overrides
    if let Ok(host) = std::env::var("HOSTLINE_HOST") {
        if let Ok(parsed) = host.parse() {
            config.server.host = parsed;
        }
    }
    if let Ok(port) = std::env::var("HOSTLINE_PORT") {
        if let Ok(parsed) = port.parse() {
            config.server.port = parsed;
        }
    }
    if let Ok(number) = std::env::var("SUPPORT_NUMBER") {
        if !number.trim().is_empty() {
            config.support_number = Some(number);
        }
    }
    if let Ok(key) = std::env::var("OPENAI_API_KEY") {
        if !key.trim().is_empty() {
            config.fallback.api_key = Some(key);
        }
    }
    if let Ok(level) = std::env::var("HOSTLINE_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Ok(json) = std::env::var("HOSTLINE_LOG_JSON") {
        config.logging.json = json == "true" || json == "1";
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_all_interfaces_on_5050() {
        let config = Config::default();
        assert_eq!(config.server.host, IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)));
        assert_eq!(config.server.port, 5050);
        assert!(config.support_number.is_none());
        assert!(config.fallback.api_key.is_none());
        assert!(config.faq.is_none());
    }

    #[test]
    fn parses_full_toml() {
        let config: Config = toml::from_str(
            r#"
            support_number = "+15551230000"

            [server]
            host = "127.0.0.1"
            port = 8080

            [fallback]
            api_key = "sk-test"
            timeout_secs = 10

            [logging]
            level = "debug"
            json = true

            [[faq]]
            keyword = "wifi"
            answer = "Ask your server for the password."
            "#,
        )
        .unwrap();

        assert_eq!(config.support_number.as_deref(), Some("+15551230000"));
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.fallback.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.fallback.timeout_secs, 10);
        assert!(config.logging.json);
        let faq = config.faq.unwrap();
        assert_eq!(faq.len(), 1);
        assert_eq!(faq[0].keyword, "wifi");
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str("[server]\nport = 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, default_host());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn load_config_without_path_uses_defaults() {
        // No file involved, so this stays deterministic regardless of cwd.
        let config = load_config(None).unwrap();
        assert_eq!(config.server.port, default_port());
    }
}
