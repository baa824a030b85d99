//! The generation pipeline: load-keys → derive-JWK → write-JWKS → sign-token → write-token.
//!
//! Stages run strictly in order and the first failure stops the run. Key
//! loading happens before anything is written, so a bad key pair leaves no
//! output behind.

use crate::config::FixtureConfig;
use crate::errors::FixtureError;
use crate::jwks::{derive_jwk, write_jwks};
use crate::keys::load_key_pair;
use crate::token::{sign_token, write_token, SignedToken};
use chrono::Utc;
use common::jwk::JwkSet;
use std::path::PathBuf;
use tracing::{info, instrument};

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub jwks: JwkSet,
    pub jwks_path: PathBuf,
    pub token: SignedToken,
    pub token_path: PathBuf,
}

/// Run the pipeline using the wall clock for `iat`.
pub async fn generate(config: &FixtureConfig) -> Result<GenerationReport, FixtureError> {
    generate_with_clock(config, || Utc::now().timestamp()).await
}

/// Run the pipeline; `clock` is called exactly once, right before signing.
#[instrument(skip_all, fields(kid = %config.key_id))]
pub async fn generate_with_clock<F>(
    config: &FixtureConfig,
    clock: F,
) -> Result<GenerationReport, FixtureError>
where
    F: FnOnce() -> i64,
{
    info!("Generating JWKS from RSA keys...");

    let keys = load_key_pair(&config.private_key_path, &config.public_key_path).await?;

    let jwks = JwkSet::single(derive_jwk(&keys.public_key, &config.key_id));
    write_jwks(&jwks, &config.jwks_output_path).await?;

    let token = sign_token(&keys.private_key_pem, config, clock())?;
    write_token(&token.token, &config.token_output_path).await?;

    Ok(GenerationReport {
        jwks,
        jwks_path: config.jwks_output_path.clone(),
        token,
        token_path: config.token_output_path.clone(),
    })
}
