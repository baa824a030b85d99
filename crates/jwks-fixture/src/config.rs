use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use thiserror::Error;

/// Default key identifier shared by the JWK and the token header.
pub const DEFAULT_KEY_ID: &str = "test-key-1";

/// Default `iss` claim.
pub const DEFAULT_ISSUER: &str = "https://test.example.com";

/// Default `aud` claim.
pub const DEFAULT_AUDIENCE: &str = "sorcerer";

pub const DEFAULT_PRIVATE_KEY_PATH: &str = "test-keys/private-pkcs8.pem";
pub const DEFAULT_PUBLIC_KEY_PATH: &str = "test-keys/public.pem";
pub const DEFAULT_JWKS_OUTPUT_PATH: &str = "test-keys/jwks.json";
pub const DEFAULT_TOKEN_OUTPUT_PATH: &str = "test-keys/test-token.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureConfig {
    pub key_id: String,
    pub issuer: String,
    pub audience: String,
    pub private_key_path: PathBuf,
    pub public_key_path: PathBuf,
    pub jwks_output_path: PathBuf,
    pub token_output_path: PathBuf,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Environment variable {0} must not be empty")]
    EmptyValue(String),
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            key_id: DEFAULT_KEY_ID.to_string(),
            issuer: DEFAULT_ISSUER.to_string(),
            audience: DEFAULT_AUDIENCE.to_string(),
            private_key_path: PathBuf::from(DEFAULT_PRIVATE_KEY_PATH),
            public_key_path: PathBuf::from(DEFAULT_PUBLIC_KEY_PATH),
            jwks_output_path: PathBuf::from(DEFAULT_JWKS_OUTPUT_PATH),
            token_output_path: PathBuf::from(DEFAULT_TOKEN_OUTPUT_PATH),
        }
    }
}

impl FixtureConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a HashMap (for testing)
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(FixtureConfig {
            key_id: non_empty(vars, "JWKS_KEY_ID")?.unwrap_or(defaults.key_id),
            issuer: non_empty(vars, "JWKS_ISSUER")?.unwrap_or(defaults.issuer),
            audience: non_empty(vars, "JWKS_AUDIENCE")?.unwrap_or(defaults.audience),
            private_key_path: path_or(vars, "JWKS_PRIVATE_KEY_PATH", defaults.private_key_path),
            public_key_path: path_or(vars, "JWKS_PUBLIC_KEY_PATH", defaults.public_key_path),
            jwks_output_path: path_or(vars, "JWKS_OUTPUT_PATH", defaults.jwks_output_path),
            token_output_path: path_or(vars, "JWKS_TOKEN_OUTPUT_PATH", defaults.token_output_path),
        })
    }

    /// Apply the command-line JWKS output override, if one was given.
    pub fn with_jwks_output_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.jwks_output_path = path;
        }
        self
    }
}

/// An empty path variable counts as unset.
fn path_or(vars: &HashMap<String, String>, name: &str, default: PathBuf) -> PathBuf {
    match common::config::var(vars, name) {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => default,
    }
}

/// A set-but-empty identity value is an error rather than a silent fallback.
fn non_empty(vars: &HashMap<String, String>, name: &str) -> Result<Option<String>, ConfigError> {
    match common::config::var(vars, name) {
        None => Ok(None),
        Some("") => Err(ConfigError::EmptyValue(name.to_string())),
        Some(value) => Ok(Some(value.to_string())),
    }
}
