//! HTTP routes for the JWKS server.
//!
//! Defines the Axum router and application state.

use axum::{body::Body, http::Request, routing::any, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::Span;

use crate::config::ServerConfig;
use crate::handlers;
use crate::store::JwksStore;

/// Application state shared across all handlers.
#[derive(Debug)]
pub struct AppState {
    pub store: JwksStore,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            store: JwksStore::new(&config.jwks_file, config.cache_enabled),
        }
    }
}

/// Build the application routes.
///
/// - `/.well-known/jwks.json` and `/jwks.json` - the JWKS document
/// - `/health` - liveness, independent of the JWKS file
/// - anything else - 404
///
/// Paths match exactly and every method is accepted. The trace layer wraps
/// the fallback too, so unrouted requests are logged as well.
pub fn build_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/.well-known/jwks.json", any(handlers::handle_get_jwks))
        .route("/jwks.json", any(handlers::handle_get_jwks))
        .route("/health", any(handlers::health_check))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http().on_request(log_request))
        .with_state(state)
}

fn log_request(request: &Request<Body>, _span: &Span) {
    tracing::info!(
        target: "jwks.http",
        method = %request.method(),
        path = %request.uri().path(),
        "request"
    );
}
