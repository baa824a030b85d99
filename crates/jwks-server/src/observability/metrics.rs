//! Metric definitions for the JWKS server.
//!
//! All metrics follow Prometheus naming conventions:
//! - `jwks_` prefix
//! - `_total` suffix for counters
//!
//! # Cardinality
//!
//! - `status`: 2 values (success, error)
//! - `source`: 2 values (disk, cache)

use metrics::counter;

/// Record a request to one of the JWKS routes.
///
/// Metric: `jwks_requests_total`
/// Labels: `status`
pub fn record_jwks_request(status: &'static str) {
    counter!("jwks_requests_total", "status" => status).increment(1);
}

/// Record where a successful document read was served from.
///
/// Metric: `jwks_store_reads_total`
/// Labels: `source`
pub fn record_store_read(source: &'static str) {
    counter!("jwks_store_reads_total", "source" => source).increment(1);
}
