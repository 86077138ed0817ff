//! Graceful shutdown and signal handling.

use std::future::Future;
use std::time::Duration;

use axum_server::Handle;

/// Setup graceful shutdown on SIGTERM and SIGINT.
///
/// When either signal is received, the server will:
/// 1. Stop accepting new connections
/// 2. Wait up to `grace` for existing connections to complete
/// 3. Shutdown
pub fn setup_shutdown_handler(handle: Handle, grace: Duration) {
    tokio::spawn(shutdown_on(shutdown_signal(), handle, grace));
}

/// Wait for `signal`, then start a graceful shutdown bounded by `grace`.
pub async fn shutdown_on<F>(signal: F, handle: Handle, grace: Duration)
where
    F: Future<Output = ()>,
{
    signal.await;

    handle.graceful_shutdown(Some(grace));
    tracing::info!(
        grace_secs = grace.as_secs(),
        "Graceful shutdown initiated, waiting for connections to close"
    );
}

/// Resolves on the first Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HttpServerConfig;
    use std::net::SocketAddr;
    use tokio::io::AsyncWriteExt;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn signal_drains_and_stops_server() {
        let config = HttpServerConfig {
            shutdown_timeout_seconds: 1,
            ..HttpServerConfig::default()
        };

        let handle = Handle::new();
        let server = tokio::spawn(crate::http::serve(
            crate::routes::create_router(),
            SocketAddr::from(([127, 0, 0, 1], 0)),
            handle.clone(),
        ));
        let addr = handle.listening().await.unwrap();

        // A connection stuck mid-request keeps the drain waiting on the grace period
        let mut stalled = tokio::net::TcpStream::connect(addr).await.unwrap();
        stalled.write_all(b"GET / HTTP/1.1\r\nHost: x\r\n").await.unwrap();

        let (trigger, signal) = oneshot::channel::<()>();
        let shutdown = tokio::spawn(shutdown_on(
            async move {
                let _ = signal.await;
            },
            handle,
            config.shutdown_grace(),
        ));

        trigger.send(()).unwrap();
        shutdown.await.unwrap();

        let result = tokio::time::timeout(Duration::from_secs(10), server)
            .await
            .expect("server outlived its grace period")
            .unwrap();
        assert!(result.is_ok());
        assert!(tokio::net::TcpStream::connect(addr).await.is_err());
    }
}
