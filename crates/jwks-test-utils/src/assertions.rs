//! Custom test assertions for expressive tests
//!
//! Provides trait-based assertions for generated tokens.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use common::jwk::JwkSet;
use common::jwt::{extract_kid, FixtureClaims, TOKEN_LIFETIME_SECONDS};
use jsonwebtoken::{decode, Algorithm, Validation};
use serde::Deserialize;

/// JWT header structure
#[derive(Debug, Deserialize)]
struct JwtHeader {
    pub alg: String,
    pub typ: String,
    #[serde(default)]
    pub kid: Option<String>,
}

fn decode_segment<T: for<'de> Deserialize<'de>>(token: &str, index: usize, what: &str) -> T {
    let segment = token
        .split('.')
        .nth(index)
        .unwrap_or_else(|| panic!("JWT has no {what} segment"));
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .unwrap_or_else(|e| panic!("Failed to base64 decode JWT {what}: {e}"));
    serde_json::from_slice(&bytes).unwrap_or_else(|e| panic!("Failed to parse JWT {what}: {e}"))
}

/// Custom assertions for generated test tokens
///
/// # Example
/// ```rust,ignore
/// token
///     .assert_valid_jwt()
///     .assert_signed_by("test-key-1")
///     .assert_verifies_with(&jwks)
///     .assert_lifetime_is_one_hour();
/// ```
pub trait TokenAssertions {
    /// Assert that the token is a compact RS256 JWT with `typ: JWT`
    fn assert_valid_jwt(&self) -> &Self;

    /// Assert that the token header carries the specified `kid`
    fn assert_signed_by(&self, key_id: &str) -> &Self;

    /// Assert that the key selected by the header `kid` verifies the signature
    fn assert_verifies_with(&self, jwks: &JwkSet) -> &Self;

    /// Assert that `exp == iat + 3600`
    fn assert_lifetime_is_one_hour(&self) -> &Self;

    /// Assert that the token is for the specified subject
    fn assert_for_subject(&self, subject: &str) -> &Self;
}

impl TokenAssertions for String {
    fn assert_valid_jwt(&self) -> &Self {
        assert_eq!(
            self.split('.').count(),
            3,
            "JWT must have 3 parts (header.payload.signature)"
        );

        let header: JwtHeader = decode_segment(self, 0, "header");
        assert_eq!(header.alg, "RS256", "Expected RS256 algorithm");
        assert_eq!(header.typ, "JWT", "Expected JWT type");

        let _claims: FixtureClaims = decode_segment(self, 1, "payload");

        self
    }

    fn assert_signed_by(&self, key_id: &str) -> &Self {
        let header: JwtHeader = decode_segment(self, 0, "header");
        assert_eq!(
            header.kid.as_deref(),
            Some(key_id),
            "Token was not signed by key '{}'",
            key_id
        );

        self
    }

    fn assert_verifies_with(&self, jwks: &JwkSet) -> &Self {
        let kid = extract_kid(self).unwrap_or_else(|e| panic!("Token header unusable: {e}"));
        let jwk = jwks
            .find(&kid)
            .unwrap_or_else(|| panic!("JWKS has no key with kid '{kid}'"));
        let key = jwk
            .decoding_key()
            .unwrap_or_else(|e| panic!("JWK '{kid}' is not a usable RSA key: {e}"));

        let mut validation = Validation::new(Algorithm::RS256);
        validation.validate_aud = false;
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        if let Err(e) = decode::<FixtureClaims>(self, &key, &validation) {
            panic!("Token does not verify against JWK '{kid}': {e}");
        }

        self
    }

    fn assert_lifetime_is_one_hour(&self) -> &Self {
        let claims: FixtureClaims = decode_segment(self, 1, "payload");
        assert_eq!(
            claims.exp - claims.iat,
            TOKEN_LIFETIME_SECONDS,
            "Token lifetime should be {} seconds",
            TOKEN_LIFETIME_SECONDS
        );

        self
    }

    fn assert_for_subject(&self, subject: &str) -> &Self {
        let claims: FixtureClaims = decode_segment(self, 1, "payload");
        assert_eq!(claims.sub, subject, "Token subject mismatch");

        self
    }
}
