//! The domain layer of the TripCompare backend.
//!
//! The [`Backend`] owns the configuration, the database driver, the affiliate
//! link builder and the partner price client. Every use case exposed by the
//! REST API is a method on it:
//!
//! - [Subscribers](crate::core::subscriber): newsletter sign-ups with soft
//!   deletion.
//! - [Destinations](crate::core::destination), [deals](crate::core::deal)
//!   and [experiences](crate::core::experience): the travel catalog.
//! - [Tracking](crate::core::tracking): search and click logs.
//! - [Price alerts](crate::core::price_alert).
//! - [Seed](crate::core::seed): sample data for development databases.
//!
//! Searches and analytics combine several of them and live in
//! [`services`](crate::core::services).
//!
//! > **NOTICE**: the `Backend` is not responsible for the network layer. It
//! is used by the REST API handlers in [`servers::apis`](crate::servers::apis).
pub mod databases;
pub mod deal;
pub mod destination;
pub mod error;
pub mod experience;
pub mod price_alert;
pub mod seed;
pub mod services;
pub mod subscriber;
pub mod tracking;
pub mod validation;

use std::sync::Arc;

use chrono::{DateTime, SubsecRound, Utc};
use tracing::warn;
use tripcompare_configuration::Configuration;

use self::databases::Database;
use self::error::Error;
use crate::affiliate::LinkBuilder;
use crate::travelpayouts;

/// The domain layer service.
pub struct Backend {
    config: Arc<Configuration>,
    /// A database driver implementation: [`Sqlite3`](crate::core::databases::sqlite)
    /// or [`MySQL`](crate::core::databases::mysql)
    pub database: Arc<Box<dyn Database>>,
    links: LinkBuilder,
    partner_api: travelpayouts::Client,
}

impl Backend {
    /// `Backend` constructor.
    ///
    /// > **WARNING**: it creates the database tables when they do not exist.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to connect to the database or to build
    /// the partner HTTP client.
    pub fn new(config: &Arc<Configuration>) -> Result<Backend, Error> {
        let database = Arc::new(databases::driver::build(&config.database.driver, &config.database.path)?);

        let links = LinkBuilder::new(&config.travelpayouts, &config.partners);

        let partner_api = travelpayouts::Client::new(&config.travelpayouts)?;

        if config.travelpayouts.marker.is_none() {
            warn!("no Travelpayouts marker configured, affiliate searches will fail");
        }

        Ok(Backend {
            config: config.clone(),
            database,
            links,
            partner_api,
        })
    }

    #[must_use]
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    #[must_use]
    pub fn links(&self) -> &LinkBuilder {
        &self.links
    }

    #[must_use]
    pub fn partner_api(&self) -> &travelpayouts::Client {
        &self.partner_api
    }

    /// Whether the database answers a trivial query.
    #[must_use]
    pub fn is_database_reachable(&self) -> bool {
        self.database.count_deals(false).is_ok()
    }
}

/// Current time with the precision kept by the database.
#[must_use]
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}
