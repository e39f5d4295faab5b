use serde::{Deserialize, Serialize};

use super::cache::CacheConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::upstream::UpstreamConfig;
use super::zones::ZonesConfig;

/// Main configuration structure for Tern DNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    /// Listening socket
    pub server: ServerConfig,

    /// Passthrough resolver target and failure handling
    pub upstream: UpstreamConfig,

    pub cache: CacheConfig,

    /// Local authoritative data
    pub zones: ZonesConfig,

    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. tern-dns.toml in current directory
    /// 3. /etc/tern-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("tern-dns.toml").exists() {
            Self::from_file("tern-dns.toml")?
        } else if std::path::Path::new("/etc/tern-dns/config.toml").exists() {
            Self::from_file("/etc/tern-dns/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.into(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(upstream) = overrides.upstream {
            self.upstream.address = upstream;
        }
        if let Some(zones) = overrides.zones_path {
            self.zones.path = zones;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.upstream.socket_addr().is_none() {
            return Err(ConfigError::Validation(format!(
                "Upstream address '{}' is not a valid ip:port",
                self.upstream.address
            )));
        }

        if self.upstream.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Upstream timeout cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub upstream: Option<String>,
    pub zones_path: Option<String>,
    pub log_level: Option<String>,
}
