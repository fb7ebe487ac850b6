use serde::{Deserialize, Serialize};

use super::backend::BackendConfig;
use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::suffix::SuffixConfig;

const LOCAL_CONFIG_PATH: &str = "pdns-backend.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/pdns-backend/config.toml";

/// Main configuration structure for the remote backend
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listening endpoints (UNIX socket, optional HTTP)
    #[serde(default)]
    pub server: ServerConfig,

    /// Protocol answers (SOA mailbox, handshake text)
    #[serde(default)]
    pub backend: BackendConfig,

    /// Public suffix table source and refresh policy
    #[serde(default)]
    pub suffix: SuffixConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub database: DatabaseConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. pdns-backend.toml in current directory
    /// 3. /etc/pdns-backend/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(socket) = overrides.socket_path {
            self.server.socket_path = socket;
        }
        if let Some(port) = overrides.http_port {
            self.server.http_enabled = true;
            self.server.http_port = port;
        }
        if let Some(bind) = overrides.http_bind_address {
            self.server.http_bind_address = bind;
        }
        if let Some(db) = overrides.database_path {
            self.database.path = db;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.socket_path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Socket path cannot be empty".to_string(),
            ));
        }

        if self.server.http_enabled && self.server.http_port == 0 {
            return Err(ConfigError::Validation("HTTP port cannot be 0".to_string()));
        }

        if self.backend.hostmaster.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Hostmaster cannot be empty".to_string(),
            ));
        }

        if self.suffix.cache_ttl_secs == 0 {
            return Err(ConfigError::Validation(
                "Suffix cache TTL cannot be 0".to_string(),
            ));
        }

        if self.suffix.refresh_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "Suffix refresh interval cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub socket_path: Option<String>,
    pub http_port: Option<u16>,
    pub http_bind_address: Option<String>,
    pub database_path: Option<String>,
    pub log_level: Option<String>,
}
