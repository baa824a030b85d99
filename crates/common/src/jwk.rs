//! JSON Web Key (RFC 7517) document types.
//!
//! Only the RSA public key shape is modelled. Field order on the wire is
//! `kty`, `n`, `e`, `kid`, `alg`.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use jsonwebtoken::DecodingKey;
use serde::{Deserialize, Serialize};

/// Key type for RSA keys.
pub const KTY_RSA: &str = "RSA";

/// JWA algorithm tag for RSASSA-PKCS1-v1_5 with SHA-256.
pub const ALG_RS256: &str = "RS256";

/// RSA public JSON Web Key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsaJwk {
    /// Key type (always "RSA").
    pub kty: String,

    /// Modulus, base64url without padding.
    pub n: String,

    /// Public exponent, base64url without padding.
    pub e: String,

    /// Key ID; token headers must carry the same value.
    pub kid: String,

    /// Signing algorithm.
    pub alg: String,
}

impl RsaJwk {
    /// Build a JWK from big-endian modulus and exponent bytes.
    #[must_use]
    pub fn from_components(modulus: &[u8], exponent: &[u8], kid: &str, alg: &str) -> Self {
        Self {
            kty: KTY_RSA.to_string(),
            n: URL_SAFE_NO_PAD.encode(modulus),
            e: URL_SAFE_NO_PAD.encode(exponent),
            kid: kid.to_string(),
            alg: alg.to_string(),
        }
    }

    /// Verification key for tokens signed with the matching private key.
    ///
    /// # Errors
    ///
    /// Returns an error if `n` or `e` is not valid base64url.
    pub fn decoding_key(&self) -> Result<DecodingKey, jsonwebtoken::errors::Error> {
        DecodingKey::from_rsa_components(&self.n, &self.e)
    }
}

/// JSON Web Key Set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwkSet {
    pub keys: Vec<RsaJwk>,
}

impl JwkSet {
    /// A set holding exactly one key.
    #[must_use]
    pub fn single(key: RsaJwk) -> Self {
        Self { keys: vec![key] }
    }

    /// Look up a key by `kid`.
    #[must_use]
    pub fn find(&self, kid: &str) -> Option<&RsaJwk> {
        self.keys.iter().find(|key| key.kid == kid)
    }
}
