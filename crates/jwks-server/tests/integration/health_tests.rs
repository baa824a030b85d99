//! Integration tests for the liveness check and unknown routes

use jwks_test_utils::{TestJwksServer, TestKeyDir};
use reqwest::StatusCode;

/// `/health` answers 200 even when the JWKS file does not exist.
#[tokio::test]
async fn test_health_independent_of_jwks_file() -> Result<(), anyhow::Error> {
    // Arrange
    let keys = TestKeyDir::empty()?;
    let server = TestJwksServer::spawn_for_file(&keys.jwks_path()).await?;

    // Act
    let response = reqwest::get(format!("{}/health", server.url())).await?;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await?;
    assert_eq!(body, serde_json::json!({"status": "ok"}));

    Ok(())
}

/// Any path outside the three routes is a JSON 404.
#[tokio::test]
async fn test_unknown_routes_return_404() -> Result<(), anyhow::Error> {
    let keys = TestKeyDir::empty()?;
    let server = TestJwksServer::spawn_for_file(&keys.jwks_path()).await?;
    let client = reqwest::Client::new();

    for path in ["/", "/metrics", "/.well-known/openid-configuration", "/jwks"] {
        let response = client.get(format!("{}{}", server.url(), path)).send().await?;

        assert_eq!(response.status(), StatusCode::NOT_FOUND, "path {path}");
        let body: serde_json::Value = response.json().await?;
        assert_eq!(body, serde_json::json!({"error": "Not found"}));
    }

    Ok(())
}

/// Routing ignores the method.
#[tokio::test]
async fn test_routes_accept_any_method() -> Result<(), anyhow::Error> {
    let keys = TestKeyDir::empty()?;
    let server = TestJwksServer::spawn_for_file(&keys.jwks_path()).await?;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/health", server.url()))
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let response = client
        .put(format!("{}/nowhere", server.url()))
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}
