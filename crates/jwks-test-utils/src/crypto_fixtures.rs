//! Committed key fixtures for testing
//!
//! The PEM files under `fixtures/` were generated once with OpenSSL and
//! checked in, so every test sees the same key material. The default RSA
//! keys are 2048 bits, the minimum `jsonwebtoken` accepts for RS256.

use common::jwk::{JwkSet, RsaJwk, ALG_RS256, KTY_RSA};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// RSA private key, PKCS#8 (`BEGIN PRIVATE KEY`).
pub const RSA_PRIVATE_KEY_PEM: &str = include_str!("../fixtures/rsa-private-pkcs8.pem");

/// Public half of [`RSA_PRIVATE_KEY_PEM`], SPKI (`BEGIN PUBLIC KEY`).
pub const RSA_PUBLIC_KEY_PEM: &str = include_str!("../fixtures/rsa-public.pem");

/// Same key as [`RSA_PRIVATE_KEY_PEM`] in PKCS#1 form (`BEGIN RSA PRIVATE KEY`).
pub const RSA_PRIVATE_KEY_PKCS1_PEM: &str = include_str!("../fixtures/rsa-private-pkcs1.pem");

/// An unrelated RSA public key, for mismatched-pair tests.
pub const OTHER_RSA_PUBLIC_KEY_PEM: &str = include_str!("../fixtures/other-rsa-public.pem");

/// 8192-bit RSA private key, PKCS#8.
pub const RSA_8192_PRIVATE_KEY_PEM: &str = include_str!("../fixtures/rsa-8192-private-pkcs8.pem");

/// Public half of [`RSA_8192_PRIVATE_KEY_PEM`], SPKI.
pub const RSA_8192_PUBLIC_KEY_PEM: &str = include_str!("../fixtures/rsa-8192-public.pem");

/// Valid PKCS#8 envelope with the `rsaEncryption` OID around a garbage body.
pub const CORRUPT_RSA_PRIVATE_KEY_PEM: &str =
    include_str!("../fixtures/rsa-corrupt-private-pkcs8.pem");

/// P-256 private key, PKCS#8.
pub const EC_PRIVATE_KEY_PEM: &str = include_str!("../fixtures/ec-private-pkcs8.pem");

/// P-256 public key, SPKI.
pub const EC_PUBLIC_KEY_PEM: &str = include_str!("../fixtures/ec-public.pem");

/// Modulus of the fixture RSA key, base64url without padding.
pub const RSA_FIXTURE_MODULUS_B64URL: &str = "nb6pM942-YfpXUUK5miprIVUceh0TeHJyg8moKbZJLnXNWFpVTtZJ4T11ApnfaL4TXfoEL_crdKTSHheKfuLoDom9dGbwZwVT6CgCXBvQO2OZWZjq97ZZn3sWTGKOjpdvAGZJ8kAnCKOgmsfhB7OQThtgtLcCc2F-_oDu9hu3QTyKXoROzMJXr34M6qaZO-VE3cjsvvzypc8tbPs20CJt_Lw7Ajibw1NIOf81VKwHSeqV8y7hPitcV2mEZW75cOevHqJS6Xn3mkv1Q9Ued3mK12IU-2mPfbCSYArXQY1dgc8S8Ddv5UYcLtuC77gF5GnzPAnNwdgy4TQtjyms1RFkQ";

/// Public exponent of the fixture RSA key (65537).
pub const RSA_FIXTURE_EXPONENT_B64URL: &str = "AQAB";

/// The JWK a generator run over the fixture key pair is expected to publish.
pub fn fixture_jwk(kid: &str) -> RsaJwk {
    RsaJwk {
        kty: KTY_RSA.to_string(),
        n: RSA_FIXTURE_MODULUS_B64URL.to_string(),
        e: RSA_FIXTURE_EXPONENT_B64URL.to_string(),
        kid: kid.to_string(),
        alg: ALG_RS256.to_string(),
    }
}

/// A temporary directory laid out like `test-keys/`.
///
/// Holds `private-pkcs8.pem` and `public.pem` (the fixture RSA pair unless
/// overwritten). Removed when dropped.
pub struct TestKeyDir {
    dir: TempDir,
}

impl TestKeyDir {
    /// Create the directory with the fixture RSA key pair in place.
    pub fn new() -> io::Result<Self> {
        Self::with_keys(RSA_PRIVATE_KEY_PEM, RSA_PUBLIC_KEY_PEM)
    }

    /// Create the directory with the given private/public PEM contents.
    pub fn with_keys(private_pem: &str, public_pem: &str) -> io::Result<Self> {
        let key_dir = Self {
            dir: TempDir::new()?,
        };
        key_dir.write("private-pkcs8.pem", private_pem)?;
        key_dir.write("public.pem", public_pem)?;
        Ok(key_dir)
    }

    /// Create an empty directory (no key files).
    pub fn empty() -> io::Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn private_key_path(&self) -> PathBuf {
        self.dir.path().join("private-pkcs8.pem")
    }

    pub fn public_key_path(&self) -> PathBuf {
        self.dir.path().join("public.pem")
    }

    pub fn jwks_path(&self) -> PathBuf {
        self.dir.path().join("jwks.json")
    }

    pub fn token_path(&self) -> PathBuf {
        self.dir.path().join("test-token.txt")
    }

    /// Write `contents` to `name` inside the directory.
    pub fn write(&self, name: &str, contents: &str) -> io::Result<PathBuf> {
        let path = self.dir.path().join(name);
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Write a pretty-printed JWKS document to `jwks.json`.
    pub fn write_jwks(&self, jwks: &JwkSet) -> io::Result<PathBuf> {
        let json = serde_json::to_string_pretty(jwks).map_err(io::Error::other)?;
        self.write("jwks.json", &json)
    }
}
