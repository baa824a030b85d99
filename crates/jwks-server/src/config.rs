use std::collections::HashMap;
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use common::config::var;

pub const DEFAULT_PORT: u16 = 8888;
pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";
pub const DEFAULT_JWKS_FILE: &str = "test-keys/jwks.json";

/// Upper bound on how long shutdown waits for in-flight connections.
pub const DEFAULT_DRAIN_TIMEOUT_SECONDS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_address: SocketAddr,
    pub jwks_file: PathBuf,
    /// Keep the first successfully parsed document in memory.
    pub cache_enabled: bool,
    pub drain_timeout: Duration,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid PORT: {0}")]
    InvalidPort(String),

    #[error("Invalid BIND_HOST: {0}")]
    InvalidBindHost(String),

    #[error("Invalid {name}: expected true/false, got {value:?}")]
    InvalidBool { name: String, value: String },

    #[error("Invalid JWKS_DRAIN_TIMEOUT_SECONDS: {0}")]
    InvalidDrainTimeout(String),
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a HashMap (for testing)
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        // An empty value counts as unset
        let port = match var(vars, "PORT").filter(|v| !v.is_empty()) {
            Some(value) => value
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidPort(format!("{:?}: {}", value, e)))?,
            None => DEFAULT_PORT,
        };

        let host_str = var(vars, "BIND_HOST")
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_BIND_HOST);
        let host: IpAddr = host_str
            .parse()
            .map_err(|e| ConfigError::InvalidBindHost(format!("{:?}: {}", host_str, e)))?;

        // JWKS_FILE wins; KEY_DIR points at a directory holding jwks.json
        let jwks_file = match (var(vars, "JWKS_FILE"), var(vars, "KEY_DIR")) {
            (Some(file), _) if !file.is_empty() => PathBuf::from(file),
            (_, Some(dir)) if !dir.is_empty() => PathBuf::from(dir).join("jwks.json"),
            _ => PathBuf::from(DEFAULT_JWKS_FILE),
        };

        let cache_enabled = match var(vars, "JWKS_CACHE") {
            Some(value) => parse_bool("JWKS_CACHE", value)?,
            None => false,
        };

        let drain_timeout = var(vars, "JWKS_DRAIN_TIMEOUT_SECONDS").filter(|v| !v.is_empty());
        let drain_secs = match drain_timeout {
            Some(value) => value
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidDrainTimeout(format!("{:?}: {}", value, e)))?,
            None => DEFAULT_DRAIN_TIMEOUT_SECONDS,
        };

        Ok(ServerConfig {
            bind_address: SocketAddr::new(host, port),
            jwks_file,
            cache_enabled,
            drain_timeout: Duration::from_secs(drain_secs),
        })
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
