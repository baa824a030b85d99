//! JWKS server error types.
//!
//! `JwksReadError` is per-request: it is logged and turned into the generic
//! 500 body, so clients never see file paths or parser output.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Body sent for a failed JWKS read.
pub const READ_FAILURE_MESSAGE: &str = "Failed to read JWKS";

/// Body sent for unknown routes.
pub const NOT_FOUND_MESSAGE: &str = "Not found";

/// Failure to produce the JWKS document for one request.
#[derive(Debug, Error)]
pub enum JwksReadError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Fatal errors for the server binary.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to bind: {0}")]
    Bind(#[source] io::Error),

    #[error("Server error: {0}")]
    Serve(#[source] io::Error),

    #[error("Server task failed: {0}")]
    Task(String),
}

#[derive(Debug, Serialize)]
pub(crate) struct ErrorResponse {
    pub error: &'static str,
}

impl IntoResponse for JwksReadError {
    fn into_response(self) -> Response {
        tracing::warn!(target: "jwks.store", error = %self, "Failed to read JWKS");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: READ_FAILURE_MESSAGE,
            }),
        )
            .into_response()
    }
}
