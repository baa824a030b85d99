//! JWKS Fixture Generator Library
//!
//! Turns a pre-existing RSA key pair into a JWKS document and a signed RS256
//! test token for exercising bearer-token validation without a live identity
//! provider.
//!
//! # Modules
//!
//! - `config` - Generator configuration (key id, issuer, audience, paths)
//! - `errors` - Error types
//! - `keys` - Key pair loading
//! - `jwks` - JWK derivation and JWKS persistence
//! - `token` - Test token signing and persistence
//! - `pipeline` - The end-to-end generation run

pub mod config;
pub mod errors;
pub mod jwks;
pub mod keys;
pub mod pipeline;
pub mod token;

pub use config::FixtureConfig;
pub use errors::FixtureError;
pub use pipeline::{generate, generate_with_clock, GenerationReport};
