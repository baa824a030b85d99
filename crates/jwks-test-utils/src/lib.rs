//! # JWKS Test Utilities
//!
//! Shared test utilities for the JWKS fixture generator and server.
//!
//! This crate provides:
//! - Committed PEM key fixtures (RSA, EC, PKCS#1) and their known JWK components
//! - Temporary key directories laid out like `test-keys/`
//! - Server test harness (`TestJwksServer` for end-to-end tests)
//! - Custom assertions (`TokenAssertions` trait)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use jwks_test_utils::*;
//!
//! #[tokio::test]
//! async fn test_example() -> anyhow::Result<()> {
//!     let keys = TestKeyDir::new()?;
//!     let server = TestJwksServer::spawn_for_file(keys.jwks_path()).await?;
//!
//!     let jwks = server.fetch_jwks().await?;
//!     token.assert_valid_jwt().assert_verifies_with(&jwks);
//!     Ok(())
//! }
//! ```

pub mod assertions;
pub mod crypto_fixtures;
pub mod server_harness;

// Re-export commonly used items
pub use assertions::*;
pub use crypto_fixtures::*;
pub use server_harness::*;
