use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Failures of the fixture generation pipeline.
///
/// Every variant is fatal: the binary logs it and exits with status 1.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to load key from {}: {reason}", path.display())]
    KeyLoad { path: PathBuf, reason: String },

    #[error("Signing error: {0}")]
    Signing(String),

    #[error("Failed to serialize JWKS: {0}")]
    Serialization(String),

    #[error("Failed to write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FixtureError {
    /// Short label of the failing stage, used as a log field.
    pub fn stage(&self) -> &'static str {
        match self {
            FixtureError::Config(_) => "config",
            FixtureError::KeyLoad { .. } => "load_keys",
            FixtureError::Signing(_) => "sign_token",
            FixtureError::Serialization(_) | FixtureError::FileWrite { .. } => "write",
        }
    }
}
