//! Server lifecycle: serving, signal handling and bounded shutdown drain.

use axum::Router;
use std::io;
#[cfg(unix)]
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::task::JoinError;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::errors::ServerError;
#[cfg(unix)]
use crate::routes::AppState;

/// Serve `app` on `listener` until `shutdown` is cancelled.
///
/// After cancellation the listener stops accepting and in-flight
/// connections get up to `drain_timeout` to finish. Whatever is still
/// open after that is abandoned; connection tasks die with the runtime.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown: CancellationToken,
    drain_timeout: Duration,
) -> Result<(), ServerError> {
    let graceful = shutdown.clone();
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move { graceful.cancelled().await });
    let mut server_task = tokio::spawn(async move { server.await });

    tokio::select! {
        joined = &mut server_task => return flatten(joined),
        () = shutdown.cancelled() => {}
    }

    info!(
        drain_timeout_secs = drain_timeout.as_secs_f64(),
        "Stopped accepting connections, draining"
    );

    match tokio::time::timeout(drain_timeout, &mut server_task).await {
        Ok(joined) => {
            info!("All connections drained");
            flatten(joined)
        }
        Err(_) => {
            warn!("Drain timeout elapsed, closing remaining connections");
            server_task.abort();
            Ok(())
        }
    }
}

fn flatten(joined: Result<io::Result<()>, JoinError>) -> Result<(), ServerError> {
    match joined {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(ServerError::Serve(e)),
        Err(e) => Err(ServerError::Task(e.to_string())),
    }
}

/// Resolves on SIGINT or (on Unix) SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received SIGINT, starting graceful shutdown..."),
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received SIGTERM, starting graceful shutdown...");
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}

/// Invalidate the JWKS cache on every SIGHUP until `shutdown` fires.
#[cfg(unix)]
pub async fn invalidate_on_hangup(state: Arc<AppState>, shutdown: CancellationToken) {
    let mut hangups = match signal::unix::signal(signal::unix::SignalKind::hangup()) {
        Ok(stream) => stream,
        Err(e) => {
            error!("Failed to listen for SIGHUP: {}", e);
            return;
        }
    };

    loop {
        tokio::select! {
            received = hangups.recv() => {
                if received.is_none() {
                    break;
                }
                state.store.invalidate().await;
                info!("Received SIGHUP, JWKS cache invalidated");
            }
            () = shutdown.cancelled() => break,
        }
    }
}
