//! Liveness and fallback handlers. Neither touches the JWKS file.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::errors::{ErrorResponse, NOT_FOUND_MESSAGE};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Liveness check. Answers 200 regardless of the JWKS file's state.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Fallback for every path that is not routed.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: NOT_FOUND_MESSAGE,
        }),
    )
}
