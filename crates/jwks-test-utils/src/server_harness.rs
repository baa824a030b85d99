//! Test server harness for E2E testing
//!
//! Provides TestJwksServer for spawning real JWKS server instances in tests.

use common::jwk::JwkSet;
use jwks_server::config::ServerConfig;
use jwks_server::errors::ServerError;
use jwks_server::routes::{build_routes, AppState};
use jwks_server::server::serve;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Test harness for spawning the JWKS server in E2E tests
///
/// # Example
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_jwks_round_trip() -> Result<()> {
///     let server = TestJwksServer::spawn_for_file(&jwks_path).await?;
///
///     let response = reqwest::get(server.jwks_url()).await?;
///     assert_eq!(response.status(), 200);
///     Ok(())
/// }
/// ```
pub struct TestJwksServer {
    addr: SocketAddr,
    state: Arc<AppState>,
    shutdown: CancellationToken,
    handle: Option<JoinHandle<Result<(), ServerError>>>,
}

impl TestJwksServer {
    /// Spawn a server for `config`, ignoring its bind address
    ///
    /// The server will:
    /// - Bind to a random available port (127.0.0.1:0)
    /// - Use the real route builder and serve loop
    /// - Run in the background until `shutdown` or drop
    pub async fn spawn(config: ServerConfig) -> Result<Self, anyhow::Error> {
        let state = Arc::new(AppState::new(&config));
        let app = build_routes(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|e| anyhow::anyhow!("Failed to bind test server: {}", e))?;

        let addr = listener
            .local_addr()
            .map_err(|e| anyhow::anyhow!("Failed to get local address: {}", e))?;

        let shutdown = CancellationToken::new();
        let handle = tokio::spawn(serve(
            listener,
            app,
            shutdown.clone(),
            config.drain_timeout,
        ));

        Ok(Self {
            addr,
            state,
            shutdown,
            handle: Some(handle),
        })
    }

    /// Spawn an uncached server for the JWKS file at `path`
    pub async fn spawn_for_file(path: &Path) -> Result<Self, anyhow::Error> {
        Self::spawn(test_config(path, false)).await
    }

    /// Spawn a caching server for the JWKS file at `path`
    pub async fn spawn_cached(path: &Path) -> Result<Self, anyhow::Error> {
        Self::spawn(test_config(path, true)).await
    }

    /// Get the base URL of the test server
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// URL of the well-known JWKS route
    pub fn jwks_url(&self) -> String {
        format!("{}/.well-known/jwks.json", self.url())
    }

    /// Shared state, for reaching the store directly (e.g. `invalidate`)
    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// Fetch and parse the JWKS from the well-known route
    pub async fn fetch_jwks(&self) -> Result<JwkSet, anyhow::Error> {
        let response = reqwest::get(self.jwks_url()).await?.error_for_status()?;
        Ok(response.json::<JwkSet>().await?)
    }

    /// Cancel the server and wait for the serve loop to finish
    pub async fn shutdown(mut self) -> Result<(), anyhow::Error> {
        self.shutdown.cancel();
        match self.handle.take() {
            Some(handle) => Ok(handle.await??),
            None => Ok(()),
        }
    }
}

impl Drop for TestJwksServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

/// Server configuration for tests: loopback, short drain
pub fn test_config(jwks_file: &Path, cache_enabled: bool) -> ServerConfig {
    ServerConfig {
        bind_address: SocketAddr::from(([127, 0, 0, 1], 0)),
        jwks_file: jwks_file.to_path_buf(),
        cache_enabled,
        drain_timeout: Duration::from_secs(1),
    }
}
