//! Integration tests for the optional in-memory JWKS cache

use common::jwk::JwkSet;
use jwks_test_utils::{fixture_jwk, TestJwksServer, TestKeyDir};
use reqwest::StatusCode;

/// A caching server keeps serving the first document until invalidated.
#[tokio::test]
async fn test_cached_document_until_invalidate() -> Result<(), anyhow::Error> {
    // Arrange
    let keys = TestKeyDir::empty()?;
    let jwks_path = keys.write_jwks(&JwkSet::single(fixture_jwk("first")))?;
    let server = TestJwksServer::spawn_cached(&jwks_path).await?;

    assert_eq!(server.fetch_jwks().await?.keys[0].kid, "first");

    // Act: regenerate on disk
    keys.write_jwks(&JwkSet::single(fixture_jwk("second")))?;

    // Assert: still cached
    assert_eq!(server.fetch_jwks().await?.keys[0].kid, "first");

    server.state().store.invalidate().await;
    assert_eq!(server.fetch_jwks().await?.keys[0].kid, "second");

    Ok(())
}

/// A failed read is not cached; the next request tries the file again.
#[tokio::test]
async fn test_failure_not_cached() -> Result<(), anyhow::Error> {
    let keys = TestKeyDir::empty()?;
    let server = TestJwksServer::spawn_cached(&keys.jwks_path()).await?;

    let response = reqwest::get(server.jwks_url()).await?;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    keys.write_jwks(&JwkSet::single(fixture_jwk("now-present")))?;
    assert_eq!(server.fetch_jwks().await?.keys[0].kid, "now-present");

    Ok(())
}
