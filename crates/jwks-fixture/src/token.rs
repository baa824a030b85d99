use crate::config::FixtureConfig;
use crate::errors::FixtureError;
use common::jwt::FixtureClaims;
use common::secret::{ExposeSecret, SecretString};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use std::path::Path;
use tracing::{info, instrument};

/// A signed compact JWT together with the claims it carries.
#[derive(Debug, Clone)]
pub struct SignedToken {
    pub token: String,
    pub claims: FixtureClaims,
}

/// Sign a test token with RS256.
///
/// `issued_at` is taken once by the caller so `iat` and `exp` agree.
#[instrument(skip_all, fields(kid = %config.key_id, iat = issued_at))]
pub fn sign_token(
    private_key_pem: &SecretString,
    config: &FixtureConfig,
    issued_at: i64,
) -> Result<SignedToken, FixtureError> {
    let encoding_key = EncodingKey::from_rsa_pem(private_key_pem.expose_secret().as_bytes())
        .map_err(|e| FixtureError::Signing(format!("Private key is not usable for RS256: {}", e)))?;

    let mut header = Header::new(Algorithm::RS256);
    header.typ = Some("JWT".to_string());
    header.kid = Some(config.key_id.clone());

    let claims = FixtureClaims::new(&config.issuer, &config.audience, issued_at);

    let token = encode(&header, &claims, &encoding_key)
        .map_err(|e| FixtureError::Signing(format!("JWT signing operation failed: {}", e)))?;

    Ok(SignedToken { token, claims })
}

/// Write the compact token with no trailing newline, replacing any existing file.
#[instrument(skip_all, fields(path = %path.display()))]
pub async fn write_token(token: &str, path: &Path) -> Result<(), FixtureError> {
    tokio::fs::write(path, token)
        .await
        .map_err(|source| FixtureError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;

    info!("Test token written to: {}", path.display());
    Ok(())
}
