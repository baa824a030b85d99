//! Integration tests for server shutdown

use common::jwk::JwkSet;
use jwks_test_utils::{fixture_jwk, TestJwksServer, TestKeyDir};
use std::time::Duration;

/// Cancelling an idle server completes cleanly and frees the port.
#[tokio::test]
async fn test_shutdown_completes_and_stops_accepting() -> Result<(), anyhow::Error> {
    let keys = TestKeyDir::empty()?;
    let jwks_path = keys.write_jwks(&JwkSet::single(fixture_jwk("test-key-1")))?;
    let server = TestJwksServer::spawn_for_file(&jwks_path).await?;
    let jwks_url = server.jwks_url();

    server.fetch_jwks().await?;

    tokio::time::timeout(Duration::from_secs(5), server.shutdown()).await??;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()?;
    assert!(
        client.get(jwks_url).send().await.is_err(),
        "server should no longer accept connections"
    );

    Ok(())
}
