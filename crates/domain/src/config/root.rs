use super::{ApiServerConfig, ConfigError, HandlerConfig, LoggingConfig};
use serde::{Deserialize, Serialize};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api_server: ApiServerConfig,

    #[serde(default)]
    pub handlers: HandlerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line; they win over the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub api_host: Option<String>,
    pub api_port: Option<u16>,
    pub log_level: Option<String>,
}

impl Config {
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(host) = overrides.api_host {
            self.api_server.host = host;
        }
        if let Some(port) = overrides.api_port {
            self.api_server.port = port;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_server.host.trim().is_empty() {
            return Err(ConfigError::Validation(
                "api_server.host cannot be empty".to_string(),
            ));
        }
        if self.api_server.port == 0 {
            return Err(ConfigError::Validation(
                "api_server.port cannot be 0".to_string(),
            ));
        }
        if self.api_server.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "api_server.timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.handlers.ipam_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "handlers.ipam_name cannot be empty".to_string(),
            ));
        }
        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' is not one of {:?}",
                self.logging.level, LOG_LEVELS
            )));
        }
        Ok(())
    }
}
