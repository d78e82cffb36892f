// Configuration module
// Resolves the four startup values from environment variables with defaults.

use serde::Deserialize;
use std::net::SocketAddr;

pub const DEFAULT_PORT: &str = "8080";
pub const DEFAULT_MESSAGE: &str = "Welcome to SafeHarbor Demo App!";
pub const DEFAULT_VERSION: &str = "v1.0.0";
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Immutable application configuration, resolved once at process start.
///
/// Field names map to the environment variables `PORT`, `APP_MESSAGE`,
/// `APP_VERSION` and `ENVIRONMENT`.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub port: String,
    pub app_message: String,
    pub app_version: String,
    pub environment: String,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Variables that are unset fall back to the defaults; variables that
    /// are exported but empty are treated the same way.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Environment::default())
            .set_default("port", DEFAULT_PORT)?
            .set_default("app_message", DEFAULT_MESSAGE)?
            .set_default("app_version", DEFAULT_VERSION)?
            .set_default("environment", DEFAULT_ENVIRONMENT)?
            .build()?;

        let mut cfg: Self = settings.try_deserialize()?;
        cfg.fill_empty_defaults();
        Ok(cfg)
    }

    // The config source reports an exported-but-empty variable as set,
    // so the fallback has to happen after deserialization.
    fn fill_empty_defaults(&mut self) {
        if self.port.is_empty() {
            self.port = DEFAULT_PORT.to_string();
        }
        if self.app_message.is_empty() {
            self.app_message = DEFAULT_MESSAGE.to_string();
        }
        if self.app_version.is_empty() {
            self.app_version = DEFAULT_VERSION.to_string();
        }
        if self.environment.is_empty() {
            self.environment = DEFAULT_ENVIRONMENT.to_string();
        }
    }

    /// Listen address: all interfaces on the configured port.
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("0.0.0.0:{}", self.port)
            .parse()
            .map_err(|e| format!("Invalid listen address: {e}"))
    }
}
