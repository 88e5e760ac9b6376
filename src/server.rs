//! HTTP server initialization and runtime setup.
//!
//! Builds the selected service's store and router, binds the listener and
//! runs until Ctrl-C or SIGTERM. Connections are served by hyper directly so
//! that read, write and idle timeouts apply at the transport level.

use crate::config::Config;
use crate::routes::{healthcheck_app, shortener_app, user_store_app};
use crate::state::{ShortenerState, UserStoreState};
use crate::utils::timed_stream::TimedStream;

use anyhow::Result;
use axum::Router;
use clap::ValueEnum;
use hyper_util::rt::{TokioExecutor, TokioIo, TokioTimer};
use hyper_util::server::conn::auto::Builder;
use hyper_util::server::graceful::GracefulShutdown;
use hyper_util::service::TowerToHyperService;
use std::fmt;
use std::net::SocketAddr;
use std::pin::pin;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Which service this process serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ServiceKind {
    /// URL shortener: `POST /shorten`, `GET /{code}`
    #[default]
    Shortener,
    /// User store: `POST /users`, `GET /users/{id}`
    Users,
    /// Healthcheck: `GET /healthcheck`, `GET /users/{id}` echo
    Healthcheck,
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceKind::Shortener => f.write_str("shortener"),
            ServiceKind::Users => f.write_str("users"),
            ServiceKind::Healthcheck => f.write_str("healthcheck"),
        }
    }
}

/// Runs the HTTP server for `service` with the given configuration.
///
/// Initializes:
/// - The service's in-memory store (empty)
/// - Axum router with the shared middleware stack
/// - TCP listener and graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
pub async fn run(config: Config, service: ServiceKind) -> Result<()> {
    let router = match service {
        ServiceKind::Shortener => shortener_app(ShortenerState::in_memory(), &config),
        ServiceKind::Users => user_store_app(UserStoreState::in_memory(), &config),
        ServiceKind::Healthcheck => healthcheck_app(&config),
    };
    tracing::info!("Serving {service} service");

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    serve(listener, router, ConnectionTimeouts::from(&config), shutdown_signal()).await;

    tracing::info!("Server stopped");
    Ok(())
}

/// Per-connection transport timeouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionTimeouts {
    /// Time allowed to receive a request's headers.
    pub read: Duration,
    /// Time a response write may make no progress.
    pub write: Duration,
    /// Time a connection may carry no traffic.
    pub idle: Duration,
}

impl From<&Config> for ConnectionTimeouts {
    fn from(config: &Config) -> Self {
        Self {
            read: config.read_timeout(),
            write: config.write_timeout(),
            idle: config.idle_timeout(),
        }
    }
}

/// Accepts connections on `listener` until `shutdown` resolves, then waits
/// for in-flight connections to finish.
///
/// Trailing slashes are trimmed from request paths before routing.
pub async fn serve<F>(listener: TcpListener, router: Router, timeouts: ConnectionTimeouts, shutdown: F)
where
    F: Future<Output = ()>,
{
    let app = NormalizePathLayer::trim_trailing_slash().layer(router);

    let mut builder = Builder::new(TokioExecutor::new());
    builder
        .http1()
        .timer(TokioTimer::new())
        .header_read_timeout(timeouts.read);

    let graceful = GracefulShutdown::new();
    let mut shutdown = pin!(shutdown);

    loop {
        tokio::select! {
            accepted = listener.accept() => {
                let (stream, peer) = match accepted {
                    Ok(conn) => conn,
                    Err(e) => {
                        tracing::warn!("Failed to accept connection: {}", e);
                        continue;
                    }
                };

                let io = TokioIo::new(TimedStream::new(stream, timeouts.idle, timeouts.write));
                let service = TowerToHyperService::new(app.clone());
                let connection = graceful.watch(
                    builder
                        .serve_connection_with_upgrades(io, service)
                        .into_owned(),
                );

                tokio::spawn(async move {
                    if let Err(e) = connection.await {
                        tracing::debug!(peer = %peer, error = %e, "Connection closed");
                    }
                });
            }
            () = &mut shutdown => break,
        }
    }

    drop(listener);
    graceful.shutdown().await;
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
