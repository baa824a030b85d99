//! Tracing subscriber setup shared by both binaries.

use crate::config::ObservabilityConfig;
use thiserror::Error;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Where formatted log lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stdout,
    Stderr,
}

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum ObservabilityError {
    #[error("Failed to install tracing subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Build the `EnvFilter`, preferring `RUST_LOG` directives when they parse.
#[must_use]
pub fn env_filter(config: &ObservabilityConfig, default_filter: &str) -> EnvFilter {
    config
        .log_filter
        .as_deref()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default_filter))
}

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Returns [`ObservabilityError::Init`] if a global subscriber is already set.
pub fn init_tracing(
    config: &ObservabilityConfig,
    default_filter: &str,
    target: LogTarget,
) -> Result<(), ObservabilityError> {
    let writer = match target {
        LogTarget::Stdout => BoxMakeWriter::new(std::io::stdout),
        LogTarget::Stderr => BoxMakeWriter::new(std::io::stderr),
    };

    let registry = tracing_subscriber::registry().with(env_filter(config, default_filter));

    if config.json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(writer))
            .try_init()?;
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(writer))
            .try_init()?;
    }

    Ok(())
}
