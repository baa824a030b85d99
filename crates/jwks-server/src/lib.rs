//! Static JWKS server library.
//!
//! Serves a JWKS document from disk so services under test can fetch
//! verification keys the same way they would from a real identity provider.
//!
//! # Modules
//!
//! - `config` - Environment-driven server configuration
//! - `errors` - Error types and their HTTP mapping
//! - `store` - JWKS document source with optional caching
//! - `handlers` - HTTP handlers
//! - `routes` - Router and shared state
//! - `server` - Serve loop, signals and shutdown drain
//! - `observability` - Metrics

pub mod config;
pub mod errors;
pub mod handlers;
pub mod observability;
pub mod routes;
pub mod server;
pub mod store;
