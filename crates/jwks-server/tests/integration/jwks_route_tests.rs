//! Integration tests for the JWKS routes
//!
//! Each test spawns a real server on a loopback port and talks to it over
//! HTTP, with the JWKS file living in a temporary directory.

use common::jwk::JwkSet;
use jwks_test_utils::{fixture_jwk, TestJwksServer, TestKeyDir};
use reqwest::StatusCode;

// ============================================================================
// Success
// ============================================================================

/// Both routes serve the file's document unchanged (modulo whitespace).
#[tokio::test]
async fn test_both_routes_serve_jwks() -> Result<(), anyhow::Error> {
    // Arrange
    let keys = TestKeyDir::empty()?;
    let published = JwkSet::single(fixture_jwk("test-key-1"));
    let jwks_path = keys.write_jwks(&published)?;
    let server = TestJwksServer::spawn_for_file(&jwks_path).await?;
    let client = reqwest::Client::new();

    for route in ["/.well-known/jwks.json", "/jwks.json"] {
        // Act
        let response = client
            .get(format!("{}{}", server.url(), route))
            .send()
            .await?;

        // Assert
        assert_eq!(response.status(), StatusCode::OK, "route {route}");
        assert_eq!(
            response
                .headers()
                .get("content-type")
                .and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("*")
        );

        let served: JwkSet = response.json().await?;
        assert_eq!(served, published, "route {route}");
    }

    Ok(())
}

/// The body is compact JSON with the file's field order preserved.
#[tokio::test]
async fn test_body_is_compact_and_ordered() -> Result<(), anyhow::Error> {
    let keys = TestKeyDir::empty()?;
    let jwks_path = keys.write_jwks(&JwkSet::single(fixture_jwk("test-key-1")))?;
    let server = TestJwksServer::spawn_for_file(&jwks_path).await?;

    let body = reqwest::get(server.jwks_url()).await?.text().await?;

    assert!(!body.contains('\n'), "body should be compact: {body}");
    assert!(
        body.starts_with(r#"{"keys":[{"kty":"RSA","n":""#),
        "unexpected field order: {body}"
    );
    assert!(body.ends_with(r#""e":"AQAB","kid":"test-key-1","alg":"RS256"}]}"#));

    Ok(())
}

/// Without caching, a regenerated file is visible on the next request.
#[tokio::test]
async fn test_file_is_reread_per_request() -> Result<(), anyhow::Error> {
    let keys = TestKeyDir::empty()?;
    let jwks_path = keys.write_jwks(&JwkSet::single(fixture_jwk("first")))?;
    let server = TestJwksServer::spawn_for_file(&jwks_path).await?;

    assert_eq!(server.fetch_jwks().await?.keys[0].kid, "first");

    keys.write_jwks(&JwkSet::single(fixture_jwk("second")))?;
    assert_eq!(server.fetch_jwks().await?.keys[0].kid, "second");

    Ok(())
}

// ============================================================================
// Failure
// ============================================================================

/// A missing file yields the generic 500 body, not a crash.
#[tokio::test]
async fn test_missing_file_returns_500() -> Result<(), anyhow::Error> {
    let keys = TestKeyDir::empty()?;
    let server = TestJwksServer::spawn_for_file(&keys.jwks_path()).await?;

    for route in ["/.well-known/jwks.json", "/jwks.json"] {
        let response = reqwest::get(format!("{}{}", server.url(), route)).await?;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{route}");
        let body: serde_json::Value = response.json().await?;
        assert_eq!(body, serde_json::json!({"error": "Failed to read JWKS"}), "{route}");
    }

    Ok(())
}

/// Unparseable JSON is reported the same way as a missing file.
#[tokio::test]
async fn test_invalid_json_returns_500() -> Result<(), anyhow::Error> {
    let keys = TestKeyDir::empty()?;
    let jwks_path = keys.write("jwks.json", "{\"keys\": [")?;
    let server = TestJwksServer::spawn_for_file(&jwks_path).await?;

    for route in ["/.well-known/jwks.json", "/jwks.json"] {
        let response = reqwest::get(format!("{}{}", server.url(), route)).await?;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{route}");
        let body: serde_json::Value = response.json().await?;
        assert_eq!(body["error"], "Failed to read JWKS", "{route}");
    }

    Ok(())
}

/// The server recovers once the file appears.
#[tokio::test]
async fn test_recovers_when_file_appears() -> Result<(), anyhow::Error> {
    let keys = TestKeyDir::empty()?;
    let server = TestJwksServer::spawn_for_file(&keys.jwks_path()).await?;

    let response = reqwest::get(server.jwks_url()).await?;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    keys.write_jwks(&JwkSet::single(fixture_jwk("late")))?;
    assert_eq!(server.fetch_jwks().await?.keys[0].kid, "late");

    Ok(())
}
