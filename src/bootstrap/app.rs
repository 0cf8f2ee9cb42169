//! Setup for the main TripCompare application.
//!
//! The [`setup`] only builds the application and its dependencies but it does
//! not start the application. In fact, there is no such thing as the main
//! application process. When the application starts, the only thing it does
//! is starting the REST API job.
use std::sync::Arc;

use tripcompare_configuration::Configuration;

use super::config::initialize_configuration;
use crate::bootstrap;
use crate::core::services::backend_factory;
use crate::core::Backend;

/// It loads the configuration from the environment and builds the main
/// domain [`Backend`] struct.
#[must_use]
pub fn setup() -> (Arc<Configuration>, Arc<Backend>) {
    let configuration = Arc::new(initialize_configuration());
    let backend = initialize_with_configuration(&configuration);

    (configuration, backend)
}

/// It initializes the application with the given configuration.
///
/// The configuration may be obtained from the environment (via config file or
/// env vars).
#[must_use]
pub fn initialize_with_configuration(configuration: &Arc<Configuration>) -> Arc<Backend> {
    initialize_logging(configuration);
    Arc::new(initialize_backend(configuration))
}

/// It builds the domain backend.
///
/// The backend is the domain layer service. It's the entrypoint to make
/// requests to the domain layer. It's used by the REST API.
#[must_use]
pub fn initialize_backend(config: &Arc<Configuration>) -> Backend {
    backend_factory(config)
}

/// It initializes the log threshold, format and channel.
pub fn initialize_logging(config: &Configuration) {
    bootstrap::logging::setup(config);
}
