//! Common utilities and types shared by the JWKS fixture generator and server.

#![warn(clippy::pedantic)]

/// Module for shared configuration types
pub mod config;

/// Module for JSON Web Key and JWK Set document types
pub mod jwk;

/// Module for test token claims and header helpers
pub mod jwt;

/// Module for tracing subscriber setup
pub mod observability;

/// Module for secret types that prevent accidental logging
pub mod secret;
