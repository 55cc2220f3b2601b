//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `shutterbook.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Service catalog source.
    pub catalog: CatalogConfig,
    /// Compiled dashboard hosting.
    pub dashboard: DashboardConfig,
    /// Payment provider settings.
    pub payment: PaymentConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
    /// Base URL browsers use to reach this server. Payment redirects are
    /// built from it.
    pub public_url: String,
}

/// Catalog configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON file holding the service records. `None` serves the demo catalog.
    pub path: Option<PathBuf>,
}

/// Dashboard hosting configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Directory produced by `trunk build`.
    pub dist_dir: PathBuf,
    /// Extra origin allowed to call the API (CORS).
    pub allowed_origin: Option<String>,
}

/// Payment provider configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PaymentConfig {
    /// Minutes before an unpaid checkout session expires.
    pub session_ttl_minutes: u32,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `shutterbook.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("shutterbook.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Apply `SHUTTERBOOK_*` overrides read through `var`.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("SHUTTERBOOK_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("SHUTTERBOOK_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("SHUTTERBOOK_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("SHUTTERBOOK_PUBLIC_URL") {
            self.server.public_url = val;
        }
        if let Some(val) = var("SHUTTERBOOK_CATALOG") {
            self.catalog.path = Some(PathBuf::from(val));
        }
        if let Some(val) = var("SHUTTERBOOK_DASHBOARD_DIR") {
            self.dashboard.dist_dir = PathBuf::from(val);
        }
        if let Some(val) = var("SHUTTERBOOK_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.payment.session_ttl_minutes == 0 {
            return Err(ConfigError::Validation(
                "payment.session_ttl_minutes must be non-zero".to_string(),
            ));
        }
        let url = &self.server.public_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Validation(format!(
                "server.public_url must start with http:// or https://, got `{url}`"
            )));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            public_url: "http://localhost:8080".to_string(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dist_dir: PathBuf::from("crates/adapters/dashboard_leptos/dist"),
            allowed_origin: None,
        }
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            session_ttl_minutes: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "shutterbookd=info,shutterbook=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
