//! Test token claims and header inspection.
//!
//! The generator signs [`FixtureClaims`]; tests and tooling read them back
//! with `jsonwebtoken` or peek at the unverified header with [`extract_kid`].

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Constants
// =============================================================================

/// Lifetime of a generated test token: `exp == iat + TOKEN_LIFETIME_SECONDS`.
pub const TOKEN_LIFETIME_SECONDS: i64 = 3600;

/// Subject carried by every generated test token.
pub const TEST_SUBJECT: &str = "test-user";

/// Maximum size of a token accepted by [`extract_kid`] (8KB).
pub const MAX_JWT_SIZE_BYTES: usize = 8192;

// =============================================================================
// Error Types
// =============================================================================

/// Errors raised while inspecting a compact JWT without verifying it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JwtInspectError {
    #[error("Token exceeds the maximum allowed size")]
    TokenTooLarge,

    #[error("Token is not a compact JWT")]
    MalformedToken,

    #[error("Token header has no kid")]
    MissingKid,
}

// =============================================================================
// Claims
// =============================================================================

/// Claims of a generated test token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureClaims {
    pub sub: String,
    pub iss: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

impl FixtureClaims {
    /// Build claims from a single timestamp so `iat` and `exp` stay consistent.
    #[must_use]
    pub fn new(issuer: &str, audience: &str, issued_at: i64) -> Self {
        Self {
            sub: TEST_SUBJECT.to_string(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
            iat: issued_at,
            exp: issued_at + TOKEN_LIFETIME_SECONDS,
        }
    }
}

// =============================================================================
// Header inspection
// =============================================================================

/// Extract the `kid` from a compact JWT header without verifying the signature.
///
/// # Errors
///
/// Returns an error if the token is oversized, not three dot-separated
/// segments, has an undecodable header, or carries no non-empty `kid`.
pub fn extract_kid(token: &str) -> Result<String, JwtInspectError> {
    if token.len() > MAX_JWT_SIZE_BYTES {
        return Err(JwtInspectError::TokenTooLarge);
    }

    let mut parts = token.split('.');
    let (Some(header_part), Some(_), Some(_), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(JwtInspectError::MalformedToken);
    };

    let header_bytes = URL_SAFE_NO_PAD.decode(header_part).map_err(|e| {
        tracing::debug!(target: "common.jwt", error = %e, "Failed to decode JWT header base64");
        JwtInspectError::MalformedToken
    })?;

    let header: serde_json::Value = serde_json::from_slice(&header_bytes).map_err(|e| {
        tracing::debug!(target: "common.jwt", error = %e, "Failed to parse JWT header JSON");
        JwtInspectError::MalformedToken
    })?;

    header
        .get("kid")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .ok_or(JwtInspectError::MissingKid)
}
