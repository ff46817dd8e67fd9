use std::net::IpAddr;
use std::path::Path;

use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Project config file, lowest file precedence
pub const PROJECT_CONFIG_PATH: &str = ".aviso/config.yaml";

/// Local overrides, not meant to be committed
pub const LOCAL_CONFIG_PATH: &str = ".aviso/local.yaml";

/// Prefix for environment overrides, nested keys split on `__`
pub const ENV_PREFIX: &str = "AVISO_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Log level is not one of the tracing levels
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Port 0 cannot be served on
    #[error("Invalid port: {0}. Must be between 1 and 65535")]
    InvalidPort(u16),

    /// Host is not an IP literal
    #[error("Invalid host: '{0}'. Must be an IP address")]
    InvalidHost(String),

    /// A source could not be read or did not match the config shape
    #[error("Failed to extract configuration: {0}")]
    Extract(#[from] Box<figment::Error>),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .aviso/config.yaml
    /// 3. .aviso/local.yaml (optional)
    /// 4. Environment variables (AVISO_* prefix, highest priority)
    pub fn load() -> Result<Config, ConfigError> {
        Self::load_from_dir("")
    }

    /// Same hierarchy as [`ConfigLoader::load`], with `.aviso/` resolved under `base`
    pub fn load_from_dir(base: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let base = base.as_ref();
        Self::extract(
            Figment::new()
                .merge(Serialized::defaults(Config::default()))
                .merge(Yaml::file(base.join(PROJECT_CONFIG_PATH)))
                .merge(Yaml::file(base.join(LOCAL_CONFIG_PATH)))
                .merge(Env::prefixed(ENV_PREFIX).split("__")),
        )
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        Self::extract(
            Figment::new()
                .merge(Serialized::defaults(Config::default()))
                .merge(Yaml::file(path.as_ref())),
        )
    }

    fn extract(figment: Figment) -> Result<Config, ConfigError> {
        let config: Config = figment.extract().map_err(Box::new)?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.server.port == 0 {
            return Err(ConfigError::InvalidPort(config.server.port));
        }

        if config.server.host.parse::<IpAddr>().is_err() {
            return Err(ConfigError::InvalidHost(config.server.host.clone()));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        Ok(())
    }
}
