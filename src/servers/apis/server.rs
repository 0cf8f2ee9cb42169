//! Logic to run the HTTP API server.
//!
//! It contains two main structs: `ApiServer` and `Launcher`,
//! and two main functions: `start` and `stop`.
//!
//! The `ApiServer` struct is responsible for:
//! - Starting and stopping the server.
//! - Storing the configuration.
//!
//! `ApiServer` is a state machine that can be in one of two
//! states: `Stopped` or `Running`.
//!
//! The `Launcher` struct is responsible for binding the socket and serving
//! the API with graceful shutdown.
//!
//! > **NOTICE**: the bind address can be `127.0.0.1:0` to let the operating
//! > system pick a free port. The running state keeps the actual address.
use std::net::SocketAddr;
use std::sync::Arc;

use derive_more::Constructor;
use futures::future::BoxFuture;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{error, info};
use tripcompare_located_error::{Located, LocatedError};

use super::routes::router;
use crate::core::Backend;
use crate::servers::signals::{graceful_shutdown, Halted};

/// Errors that can occur when starting or stopping the API server.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unable to bind the API server to {bind_to}: {source}")]
    UnableToBind {
        bind_to: SocketAddr,
        source: LocatedError<'static, std::io::Error>,
    },

    #[error("Unable to send the halt message, the server is already stopped")]
    UnableToHalt,

    #[error("The API server task failed: {source}")]
    TaskFailed {
        source: LocatedError<'static, tokio::task::JoinError>,
    },
}

/// A stopped API server.
pub type StoppedApiServer = ApiServer<Stopped>;

/// A running API server.
pub type RunningApiServer = ApiServer<Running>;

/// The API server controller.
///
/// It's a state machine. The launcher keeps the bind address, so a stopped
/// server starts again on the same address.
pub struct ApiServer<S> {
    /// The state of the server: `running` or `stopped`.
    pub state: S,
}

/// The `Stopped` state of the `ApiServer` struct.
pub struct Stopped {
    launcher: Launcher,
}

/// The `Running` state of the `ApiServer` struct.
pub struct Running {
    /// The address the server is listening on.
    pub binding: SocketAddr,
    pub halt_task: oneshot::Sender<Halted>,
    pub task: JoinHandle<Launcher>,
}

impl ApiServer<Stopped> {
    #[must_use]
    pub fn new(launcher: Launcher) -> Self {
        Self {
            state: Stopped { launcher },
        }
    }

    /// Starts the API server with the given backend and returns it in the
    /// running state.
    ///
    /// # Errors
    ///
    /// It would return an error if the bind address cannot be used.
    pub async fn start(self, backend: Arc<Backend>) -> Result<ApiServer<Running>, Error> {
        let (tx_halt, rx_halt) = oneshot::channel::<Halted>();

        let launcher = self.state.launcher;

        let (binding, server) = launcher.start_with_graceful_shutdown(backend, rx_halt)?;

        let task = tokio::spawn(async move {
            server.await;

            launcher
        });

        Ok(ApiServer {
            state: Running {
                binding,
                halt_task: tx_halt,
                task,
            },
        })
    }
}

impl ApiServer<Running> {
    /// Stops the API server and returns it in the stopped state.
    ///
    /// # Errors
    ///
    /// It would return an error if the halt channel is closed or the server
    /// task fails.
    pub async fn stop(self) -> Result<ApiServer<Stopped>, Error> {
        self.state.halt_task.send(Halted::Normal).map_err(|_| Error::UnableToHalt)?;

        let launcher = self.state.task.await.map_err(|e| Error::TaskFailed {
            source: Located(e).into(),
        })?;

        Ok(ApiServer {
            state: Stopped { launcher },
        })
    }
}

/// Binds the socket and serves the API router.
#[derive(Constructor, Debug)]
pub struct Launcher {
    bind_to: SocketAddr,
}

impl Launcher {
    /// Binds the socket and returns its address together with the future
    /// that serves the API until the halt message arrives.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the socket cannot be bound.
    pub fn start_with_graceful_shutdown(
        &self,
        backend: Arc<Backend>,
        rx_halt: oneshot::Receiver<Halted>,
    ) -> Result<(SocketAddr, BoxFuture<'static, ()>), Error> {
        let bind_to = self.bind_to;
        let unable_to_bind = |e: std::io::Error| Error::UnableToBind {
            bind_to,
            source: Located(e).into(),
        };

        let socket = std::net::TcpListener::bind(bind_to).map_err(unable_to_bind)?;
        socket.set_nonblocking(true).map_err(unable_to_bind)?;
        let address = socket.local_addr().map_err(unable_to_bind)?;

        let handle = axum_server::Handle::new();

        tokio::task::spawn(graceful_shutdown(
            handle.clone(),
            rx_halt,
            format!("Shutting down the API server on socket address: {address}"),
        ));

        let app = router(backend);

        let running = Box::pin(async move {
            if let Err(e) = axum_server::from_tcp(socket)
                .handle(handle)
                .serve(app.into_make_service_with_connect_info::<SocketAddr>())
                .await
            {
                error!(target: "API", "server stopped with an error: {e}");
            }
        });

        info!(target: "API", "Listening on http://{address}");

        Ok((address, running))
    }
}
