//! JWKS Server
//!
//! Serves the JWKS document produced by `jwks-gen` over HTTP.

use common::config::ObservabilityConfig;
use common::observability::{init_tracing, LogTarget};
use jwks_server::config::ServerConfig;
use jwks_server::errors::ServerError;
use jwks_server::routes::{self, AppState};
use jwks_server::server;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = init_tracing(
        &ObservabilityConfig::from_env(),
        "jwks_server=info,jwks=info,tower_http=info",
        LogTarget::Stdout,
    ) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    info!("Starting JWKS server");

    let config = ServerConfig::from_env().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    info!(
        bind_address = %config.bind_address,
        jwks_file = %config.jwks_file.display(),
        cache_enabled = config.cache_enabled,
        drain_timeout_secs = config.drain_timeout.as_secs(),
        "Configuration loaded successfully"
    );

    if !tokio::fs::try_exists(&config.jwks_file)
        .await
        .unwrap_or(false)
    {
        warn!(
            "JWKS file not found: {} (run jwks-gen first)",
            config.jwks_file.display()
        );
    }

    let state = Arc::new(AppState::new(&config));
    let app = routes::build_routes(Arc::clone(&state));

    let listener = TcpListener::bind(config.bind_address)
        .await
        .map_err(ServerError::Bind)?;
    let local_addr = listener.local_addr().map_err(ServerError::Bind)?;

    info!("JWKS server listening on {}", local_addr);
    info!("Serving JWKS from: {}", config.jwks_file.display());
    info!("Endpoints: /.well-known/jwks.json, /jwks.json, /health");

    let shutdown = CancellationToken::new();
    tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            server::shutdown_signal().await;
            shutdown.cancel();
        }
    });

    #[cfg(unix)]
    if state.store.is_caching() {
        tokio::spawn(server::invalidate_on_hangup(
            Arc::clone(&state),
            shutdown.clone(),
        ));
    }

    server::serve(listener, app, shutdown, config.drain_timeout).await?;

    info!("Server closed");
    Ok(())
}
