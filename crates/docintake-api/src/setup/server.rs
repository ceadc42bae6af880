//! Server startup and graceful shutdown

use anyhow::{Context, Result};
use axum::Router;
use docintake_core::Config;
use std::io::ErrorKind;
use tokio::net::TcpListener;

/// Bind `host:port`, moving to the next port while the current one is in use.
///
/// Tries `port` and then up to `fallback_attempts` following ports. Returns the
/// listener together with the port it is actually bound to, which differs from
/// `port` when falling back or when `port` is 0. Errors other than
/// `AddrInUse` are returned immediately.
pub async fn bind_with_fallback(
    host: &str,
    port: u16,
    fallback_attempts: u16,
) -> Result<(TcpListener, u16)> {
    let mut candidate = port;

    for attempt in 0..=fallback_attempts {
        match TcpListener::bind((host, candidate)).await {
            Ok(listener) => {
                let bound = listener.local_addr()?.port();
                if attempt > 0 {
                    tracing::info!(requested_port = port, bound_port = bound, "Bound fallback port");
                }
                return Ok((listener, bound));
            }
            Err(e) if e.kind() == ErrorKind::AddrInUse => {
                tracing::warn!(port = candidate, "Port in use, trying next port");
                candidate = candidate.checked_add(1).ok_or_else(|| {
                    anyhow::anyhow!("No free port found above {}", port)
                })?;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to bind {}:{}", host, candidate));
            }
        }
    }

    Err(anyhow::anyhow!(
        "Ports {} through {} are all in use",
        port,
        port.saturating_add(fallback_attempts)
    ))
}

/// Start the server with graceful shutdown
pub async fn start_server(config: &Config, app: Router) -> Result<()> {
    let (listener, port) =
        bind_with_fallback("0.0.0.0", config.server_port(), config.port_fallback_attempts())
            .await?;

    tracing::info!(
        port,
        upload_dir = %config.upload_dir().display(),
        max_file_mb = config.max_file_size_bytes() / 1024 / 1024,
        max_request_mb = config.max_request_size_bytes() / 1024 / 1024,
        pdf_max_pages = config.pdf_max_pages(),
        ocr_language = %config.ocr_language(),
        "Server ready and accepting connections"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Signal handler for graceful shutdown
///
/// Listens for Ctrl+C (SIGINT) and SIGTERM signals to initiate graceful shutdown.
/// If a handler cannot be installed, that signal source is ignored.
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
            Ok(mut signal) => {
                signal.recv().await;
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
            tracing::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::info!("Received terminate signal");
        },
    }

    tracing::info!("Shutting down gracefully...");
}
