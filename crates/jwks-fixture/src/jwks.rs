use crate::errors::FixtureError;
use common::jwk::{JwkSet, RsaJwk, ALG_RS256};
use rsa::traits::PublicKeyParts;
use rsa::RsaPublicKey;
use std::path::Path;
use tracing::{info, instrument};

/// Convert the public key into an RS256 JWK tagged with `key_id`.
pub fn derive_jwk(public_key: &RsaPublicKey, key_id: &str) -> RsaJwk {
    RsaJwk::from_components(
        &public_key.n().to_bytes_be(),
        &public_key.e().to_bytes_be(),
        key_id,
        ALG_RS256,
    )
}

/// Write the set as pretty-printed JSON, replacing any existing file.
///
/// Parent directories are not created.
#[instrument(skip_all, fields(path = %path.display()))]
pub async fn write_jwks(jwks: &JwkSet, path: &Path) -> Result<(), FixtureError> {
    let json = serde_json::to_string_pretty(jwks)
        .map_err(|e| FixtureError::Serialization(e.to_string()))?;

    tokio::fs::write(path, json)
        .await
        .map_err(|source| FixtureError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;

    info!("JWKS written to: {}", path.display());
    Ok(())
}
