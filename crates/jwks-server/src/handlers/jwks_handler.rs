use axum::{
    extract::State,
    http::header::{HeaderMap, HeaderValue, ACCESS_CONTROL_ALLOW_ORIGIN},
    Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

use crate::errors::JwksReadError;
use crate::observability::metrics::record_jwks_request;
use crate::routes::AppState;

/// Handle JWKS request
///
/// ANY /.well-known/jwks.json, ANY /jwks.json
///
/// Serves the document as compact JSON. Browser-based verifiers on other
/// origins are allowed to fetch it.
#[instrument(name = "jwks.get", skip_all, fields(status))]
pub async fn handle_get_jwks(
    State(state): State<Arc<AppState>>,
) -> Result<(HeaderMap, Json<Value>), JwksReadError> {
    let result = state.store.load().await;

    let status = if result.is_ok() { "success" } else { "error" };
    tracing::Span::current().record("status", status);
    record_jwks_request(status);

    let jwks = result?;

    let mut headers = HeaderMap::new();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));

    Ok((headers, Json(jwks)))
}
