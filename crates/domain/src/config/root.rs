use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::records::RecordsConfig;
use super::resolver::ResolverConfig;
use super::server::ServerConfig;

const LOCAL_CONFIG_PATH: &str = "dnsview.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/dnsview/config.toml";

/// Main configuration structure for DNSView
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// HTTP listener and CORS origin
    #[serde(default)]
    pub server: ServerConfig,

    /// Records file shared with the resolver script
    #[serde(default)]
    pub records: RecordsConfig,

    /// External resolver script invocation
    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dnsview.toml in current directory
    /// 3. /etc/dnsview/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(dir) = overrides.shared_dir {
            self.records.shared_dir = dir;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("Port cannot be 0".to_string()));
        }

        if !is_header_safe(&self.server.allowed_origin) {
            return Err(ConfigError::Validation(format!(
                "Allowed origin '{}' is not a valid header value",
                self.server.allowed_origin
            )));
        }

        if self.records.file_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Records file name cannot be empty".to_string(),
            ));
        }

        if self.resolver.interpreter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Resolver interpreter cannot be empty".to_string(),
            ));
        }

        if self.resolver.script.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Resolver script cannot be empty".to_string(),
            ));
        }

        if self.resolver.timeout_secs == Some(0) {
            return Err(ConfigError::Validation(
                "Resolver timeout must be greater than 0".to_string(),
            ));
        }

        if self.resolver.serialize_access && self.resolver.timeout_secs.is_none() {
            return Err(ConfigError::Validation(
                "Resolver serialize_access requires timeout_secs".to_string(),
            ));
        }

        Ok(())
    }
}

fn is_header_safe(value: &str) -> bool {
    !value.is_empty()
        && value
            .bytes()
            .all(|b| b == b'\t' || (0x20..0x7f).contains(&b))
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub shared_dir: Option<PathBuf>,
    pub log_level: Option<String>,
}
