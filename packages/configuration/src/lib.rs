//! Configuration data structures for the TripCompare backend.
//!
//! The configuration is loaded from a [TOML](https://toml.io/en/) document
//! and can be overridden with environment variables:
//!
//! 1. `TRIPCOMPARE_CONFIG_TOML`: the whole TOML document. When it is set
//!    the configuration file is ignored.
//! 2. `TRIPCOMPARE_CONFIG_TOML_PATH`: path of the TOML file. Defaults to the
//!    development file shipped in `share/default/config`.
//! 3. `TRIPCOMPARE_<SECTION>__<FIELD>`: overrides a single value, for
//!    example `TRIPCOMPARE_TRAVELPAYOUTS__TOKEN=...`.
//!
//! Missing values fall back to the defaults of each section. The default
//! development configuration is:
//!
//! ```toml
//! [app]
//! name = "TripCompare API"
//! version = "1.0.0"
//! debug = true
//!
//! [logging]
//! threshold = "info"
//! style = "full"
//!
//! [database]
//! driver = "Sqlite3"
//! path = "./storage/tripcompare/lib/database/sqlite3.db"
//!
//! [http_api]
//! bind_address = "127.0.0.1:8000"
//! cors_origins = ["http://localhost:3000", "http://localhost:5173", "*"]
//! on_reverse_proxy = false
//!
//! [http_api.access_tokens]
//! admin = "MyAccessToken"
//!
//! [travelpayouts]
//! host = "tripcompare.eu"
//! flight_api_url = "https://api.travelpayouts.com/"
//! hotel_api_url = "https://engine.hotellook.com/"
//! request_timeout_secs = 30
//! lookup_timeout_secs = 15
//!
//! [partners]
//! ```
//!
//! Partner credentials (`travelpayouts.token`, `travelpayouts.marker`,
//! `partners.getyourguide_partner_id`) have no default. Requests that need
//! them fail with a configuration error until they are set.
pub mod v1;

use std::collections::HashMap;
use std::env;
use std::sync::Arc;

use thiserror::Error;
use tripcompare_located_error::{DynError, LocatedError};

/// The whole configuration document. It has priority over the config file.
const ENV_VAR_CONFIG_TOML: &str = "TRIPCOMPARE_CONFIG_TOML";

/// The configuration file location.
pub const ENV_VAR_CONFIG_TOML_PATH: &str = "TRIPCOMPARE_CONFIG_TOML_PATH";

/// Prefix of the environment variables that override single values.
pub const CONFIG_OVERRIDE_PREFIX: &str = "TRIPCOMPARE_";

/// Separator between nested keys in override variables.
pub const CONFIG_OVERRIDE_SEPARATOR: &str = "__";

pub type Configuration = v1::Configuration;
pub type App = v1::app::App;
pub type Logging = v1::logging::Logging;
pub type Threshold = v1::logging::Threshold;
pub type LogStyle = v1::logging::Style;
pub type Database = v1::database::Database;
pub type HttpApi = v1::http_api::HttpApi;
pub type Travelpayouts = v1::travelpayouts::Travelpayouts;
pub type Partners = v1::partners::Partners;

pub type AccessTokens = HashMap<String, String>;

/// Information required for loading config
#[derive(Debug, Default, Clone)]
pub struct Info {
    config_toml: Option<String>,
    config_toml_path: String,
}

impl Info {
    /// Reads the configuration sources from the environment.
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to obtain a configuration.
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(default_config_toml_path: String) -> Result<Self, Error> {
        let config_toml = env::var(ENV_VAR_CONFIG_TOML).ok();

        if config_toml.is_some() {
            println!("Loading configuration from environment variable {ENV_VAR_CONFIG_TOML} ...");
        }

        let config_toml_path = if let Ok(config_toml_path) = env::var(ENV_VAR_CONFIG_TOML_PATH) {
            println!("Loading configuration from file: `{config_toml_path}` ...");
            config_toml_path
        } else {
            println!("Loading configuration from default configuration file: `{default_config_toml_path}` ...");
            default_config_toml_path
        };

        Ok(Self {
            config_toml,
            config_toml_path,
        })
    }

    #[must_use]
    pub fn from_toml(config_toml: &str) -> Self {
        Self {
            config_toml: Some(config_toml.to_owned()),
            config_toml_path: String::new(),
        }
    }
}

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// Unable to read or merge the configuration sources.
    #[error("Failed processing the configuration: {source}")]
    ConfigError {
        source: LocatedError<'static, dyn std::error::Error + Send + Sync>,
    },

    /// The configuration cannot be encoded back into TOML.
    #[error("Failed encoding the configuration: {source}")]
    EncodingError {
        source: LocatedError<'static, dyn std::error::Error + Send + Sync>,
    },
}

impl From<figment::Error> for Error {
    #[track_caller]
    fn from(err: figment::Error) -> Self {
        Self::ConfigError {
            source: (Arc::new(err) as DynError).into(),
        }
    }
}

impl From<toml::ser::Error> for Error {
    #[track_caller]
    fn from(err: toml::ser::Error) -> Self {
        Self::EncodingError {
            source: (Arc::new(err) as DynError).into(),
        }
    }
}
