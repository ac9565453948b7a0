use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::{DispatchMode, ResolverConfig, ZoneMatchOrder};
use super::server::ServerConfig;
use super::zones::ZoneEntry;

const LOCAL_CONFIG_PATH: &str = "portare-dns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/portare-dns/config.toml";

/// Main configuration structure for Portare DNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listening socket
    #[serde(default)]
    pub server: ServerConfig,

    /// Resolution behaviour
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Zones loaded into the zone store at startup
    #[serde(default)]
    pub zones: Vec<ZoneEntry>,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. portare-dns.toml in current directory
    /// 3. /etc/portare-dns/config.toml
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
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(order) = overrides.zone_match_order {
            self.resolver.zone_match_order = order;
        }
        if let Some(dispatch) = overrides.dispatch {
            self.resolver.dispatch = dispatch;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.server.bind_address.parse::<IpAddr>().is_err() {
            return Err(ConfigError::Validation(format!(
                "Bind address '{}' is not an IP address",
                self.server.bind_address
            )));
        }

        if self.server.recv_buffer_size < 512 {
            return Err(ConfigError::Validation(
                "Receive buffer must hold at least 512 bytes".to_string(),
            ));
        }

        if self.resolver.lookup_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Lookup timeout must be greater than 0".to_string(),
            ));
        }

        for zone in &self.zones {
            if zone.name.trim().is_empty() {
                return Err(ConfigError::Validation("Zone with empty name".to_string()));
            }
        }

        Ok(())
    }

    /// Socket address string the DNS listener binds to.
    pub fn dns_bind_addr(&self) -> String {
        match self.server.bind_address.parse::<IpAddr>() {
            Ok(IpAddr::V6(_)) => format!("[{}]:{}", self.server.bind_address, self.server.dns_port),
            _ => format!("{}:{}", self.server.bind_address, self.server.dns_port),
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
    pub zone_match_order: Option<ZoneMatchOrder>,
    pub dispatch: Option<DispatchMode>,
}
