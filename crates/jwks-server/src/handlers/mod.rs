//! HTTP request handlers for the JWKS server.

pub mod health;
pub mod jwks_handler;

pub use health::{health_check, not_found};
pub use jwks_handler::handle_get_jwks;
