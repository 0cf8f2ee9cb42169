//! TripCompare application.
//!
//! The application has a global configuration for all its jobs. It's
//! basically a container for other services.
//!
//! The application is responsible for:
//!
//! - Warning about missing partner credentials.
//! - Starting the jobs.
//!
//! Jobs executed always:
//!
//! - REST API
use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::warn;
use tripcompare_configuration::Configuration;

use crate::bootstrap::jobs::http_api;
use crate::core::Backend;
use crate::servers;

/// Starts the jobs and returns their handles.
///
/// # Panics
///
/// Will panic if the REST API cannot be started.
pub async fn start(config: &Configuration, backend: Arc<Backend>) -> Vec<JoinHandle<()>> {
    let mut jobs: Vec<JoinHandle<()>> = Vec::new();

    if config.travelpayouts.token.is_none() {
        warn!("no Travelpayouts token configured, partner price lookups will fail");
    }

    if config.partners.getyourguide_partner_id.is_none() {
        warn!("no GetYourGuide partner id configured, experience searches will fail");
    }

    if config.app.debug {
        warn!("debug mode enabled, the seed endpoint is available");
    }

    // Start HTTP API
    jobs.push(http_api::start_job(&config.http_api, backend, servers::apis::Version::V1).await);

    jobs
}
