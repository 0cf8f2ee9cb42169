//! Shutdown signals of the API server.
use std::time::Duration;

use derive_more::Display;
use tokio::sync::oneshot;
use tokio::time::sleep;
use tracing::{info, warn};

/// Seconds open connections are given to finish once the server halts.
pub const GRACE_PERIOD_SECS: u64 = 30;

/// Message sent to a running server to stop it.
#[derive(Copy, Clone, Debug, Display)]
pub enum Halted {
    #[display("normal")]
    Normal,
}

/// Resolves on `ctrl_c` or the `terminate` signal.
///
/// # Panics
///
/// Will panic if the signal handlers cannot be installed.
pub async fn global_shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {}
    }
}

/// Resolves when a halt message arrives or on the [`global_shutdown_signal`].
///
/// A dropped sender also halts the server.
pub async fn shutdown_signal(rx_halt: oneshot::Receiver<Halted>) {
    let halt = async {
        match rx_halt.await {
            Ok(signal) => info!("Halt signal processed: {signal}"),
            Err(_) => warn!("Halt channel closed, stopping"),
        }
    };

    tokio::select! {
        () = halt => {},
        () = global_shutdown_signal() => { info!("Global shutdown signal processed") }
    }
}

/// Waits for the [`shutdown_signal`], then stops accepting connections and
/// resolves once the open ones are closed or the grace period ends.
pub async fn graceful_shutdown(handle: axum_server::Handle, rx_halt: oneshot::Receiver<Halted>, message: String) {
    shutdown_signal(rx_halt).await;

    info!("{message}");

    handle.graceful_shutdown(Some(Duration::from_secs(GRACE_PERIOD_SECS)));

    while handle.connection_count() > 0 {
        info!("remaining alive connections: {}", handle.connection_count());

        sleep(Duration::from_secs(1)).await;
    }
}
