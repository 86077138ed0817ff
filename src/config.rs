//! Configuration loading and constants.
//!
//! Defines the fixed response bodies, HTTP cache TTLs, default paths and the
//! `AppConfig` root struct. Configuration is read from an optional TOML file;
//! every key has a default so an empty file (or no file) is valid.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

// =============================================================================
// Response Bodies
// =============================================================================

/// Announcement served on `/`. Kept byte-for-byte, spelling included.
pub const HOME_MESSAGE: &str = " \n \n \n  New Upates are released!! \n \n This is version 2.1";

/// Body of the liveness probe on `/health`.
pub const HEALTH_STATUS: &str = "OK";

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Home page - the announcement only changes with a new deploy
pub const HTTP_CACHE_HOME_MAX_AGE: u32 = 60;
pub const HTTP_CACHE_HOME_SWR: u32 = 30;

pub const CACHE_CONTROL_HOME: &str = formatcp!(
    "public, max-age={}, stale-while-revalidate={}",
    HTTP_CACHE_HOME_MAX_AGE,
    HTTP_CACHE_HOME_SWR
);

/// Liveness probes must reach the process every time
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

// =============================================================================
// Defaults
// =============================================================================

/// Default configuration file path, used only when it exists
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Listen on every interface
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Port the announcement service has always been reached on
pub const DEFAULT_PORT: u16 = 5000;

/// Seconds to wait for in-flight connections on shutdown
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// Default log filter when neither --log-level nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "release_notice=info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

const LOG_FORMATS: [&str; 2] = ["text", "json"];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
    /// Grace period for draining connections after SIGTERM/SIGINT
    #[serde(default = "HttpServerConfig::default_shutdown_timeout")]
    pub shutdown_timeout_seconds: u64,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            shutdown_timeout_seconds: Self::default_shutdown_timeout(),
        }
    }
}

impl HttpServerConfig {
    /// How long open connections may keep the process alive after a shutdown signal.
    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_seconds)
    }

    fn default_host() -> String {
        DEFAULT_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_PORT
    }

    fn default_shutdown_timeout() -> u64 {
        DEFAULT_SHUTDOWN_TIMEOUT_SECS
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load an explicitly requested file, or fall back to the default path
    /// when it exists, or to built-in defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::load(DEFAULT_CONFIG_PATH),
            None => Ok(Self::default()),
        }
    }

    /// Command-line values take precedence over the file.
    pub fn apply_overrides(
        &mut self,
        host: Option<String>,
        port: Option<u16>,
    ) -> Result<(), ConfigError> {
        if let Some(host) = host {
            self.http.host = host;
        }
        if let Some(port) = port {
            self.http.port = port;
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.host.trim().is_empty() {
            return Err(ConfigError::Validation("http.host must not be empty".to_string()));
        }
        if self.http.port == 0 {
            return Err(ConfigError::Validation("http.port must be non-zero".to_string()));
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.format must be one of {:?}, got '{}'",
                LOG_FORMATS, self.logging.format
            )));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
