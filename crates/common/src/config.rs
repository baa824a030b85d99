//! Common configuration types shared by the generator and the server.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Observability configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directives (from `RUST_LOG`); `None` uses the binary's default
    pub log_filter: Option<String>,
    /// Enable JSON-formatted logs
    pub json_logs: bool,
}

impl ObservabilityConfig {
    /// Load observability settings from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(&std::env::vars().collect())
    }

    /// Load observability settings from a map (for testing).
    ///
    /// `LOG_FORMAT=json` (case-insensitive) enables JSON output; any other
    /// value keeps the human-readable formatter.
    #[must_use]
    pub fn from_vars(vars: &HashMap<String, String>) -> Self {
        let log_filter = vars
            .get("RUST_LOG")
            .filter(|v| !v.trim().is_empty())
            .cloned();

        let json_logs = vars
            .get("LOG_FORMAT")
            .is_some_and(|v| v.eq_ignore_ascii_case("json"));

        Self {
            log_filter,
            json_logs,
        }
    }
}

/// Read an optional variable, treating a missing entry as `None`.
///
/// Unlike a plain `get`, this trims surrounding whitespace so that values
/// copied from shell exports behave the same as literal ones.
#[must_use]
pub fn var<'a>(vars: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    vars.get(name).map(|v| v.trim())
}
