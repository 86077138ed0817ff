//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use axum_server::Handle;

use crate::config::AppConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address '{0}'")]
    InvalidAddress(String),

    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),
}

/// Start the HTTP server based on configuration.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr = resolve(&config.http.host, config.http.port).await?;
    let handle = Handle::new();

    shutdown::setup_shutdown_handler(handle.clone(), config.http.shutdown_grace());

    serve(app, addr, handle).await
}

/// Serve `app` on `addr` until `handle` is told to shut down.
///
/// Binding to port 0 picks a free port; `Handle::listening` reports it.
pub async fn serve(app: Router, addr: SocketAddr, handle: Handle) -> Result<(), ServerError> {
    tracing::info!(%addr, "Starting HTTP server");

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

/// Resolve `host:port`, accepting IP literals (v4 or v6) and hostnames.
async fn resolve(host: &str, port: u16) -> Result<SocketAddr, ServerError> {
    let display = if host.contains(':') {
        format!("[{}]:{}", host, port)
    } else {
        format!("{}:{}", host, port)
    };

    tokio::net::lookup_host((host, port))
        .await
        .ok()
        .and_then(|mut addrs| addrs.next())
        .ok_or(ServerError::InvalidAddress(display))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolves_wildcard_ipv4() {
        let addr = resolve("0.0.0.0", 5000).await.unwrap();
        assert_eq!(addr, SocketAddr::from(([0, 0, 0, 0], 5000)));
    }

    #[tokio::test]
    async fn resolves_ipv6_literal() {
        let addr = resolve("::1", 8080).await.unwrap();
        assert!(addr.is_ipv6());
        assert_eq!(addr.port(), 8080);
    }

    #[tokio::test]
    async fn rejects_garbage_host() {
        let err = resolve("not a host", 80).await.unwrap_err();
        assert!(matches!(err, ServerError::InvalidAddress(ref a) if a == "not a host:80"));
    }

    #[tokio::test]
    async fn second_bind_on_same_port_fails() {
        let first = Handle::new();
        let server = tokio::spawn(serve(
            crate::routes::create_router(),
            SocketAddr::from(([127, 0, 0, 1], 0)),
            first.clone(),
        ));
        let addr = first.listening().await.unwrap();

        let result = serve(crate::routes::create_router(), addr, Handle::new()).await;
        assert!(matches!(result, Err(ServerError::Bind(_))));

        first.shutdown();
        server.await.unwrap().unwrap();
    }
}
