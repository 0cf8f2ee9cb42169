//! REST API job starter.
//!
//! The [`http_api::start_job`](crate::bootstrap::jobs::http_api::start_job)
//! function starts the REST API.
//!
//! > **NOTICE**: that even though there is only one job the API has different
//! versions. API consumers can choose which version to use. The API version is
//! part of the URL, for example: `http://localhost:8000/api/v1/deals`.
//!
//! The job waits for the server to be bound before returning, so the bind
//! address is logged and any binding error aborts the start up.
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::info;
use tripcompare_configuration::HttpApi;

use crate::core::Backend;
use crate::servers::apis::server::{ApiServer, Launcher};
use crate::servers::apis::Version;

/// This function starts a new API server with the provided configuration.
///
/// The returned task finishes when the server stops.
///
/// # Panics
///
/// It would panic if the API server cannot be started.
pub async fn start_job(config: &HttpApi, backend: Arc<Backend>, version: Version) -> JoinHandle<()> {
    let bind_to = config.bind_address;

    match version {
        Version::V1 => start_v1(bind_to, backend).await,
    }
}

async fn start_v1(socket: SocketAddr, backend: Arc<Backend>) -> JoinHandle<()> {
    let server = ApiServer::new(Launcher::new(socket))
        .start(backend)
        .await
        .expect("it should be able to start the REST API");

    info!(target: "API", "Started on http://{}", server.state.binding);

    tokio::spawn(async move {
        assert!(!server.state.halt_task.is_closed(), "Halt channel should be open");
        server.state.task.await.expect("failed to close service");
    })
}
