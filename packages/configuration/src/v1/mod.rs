//! Version 1 of the configuration document.
pub mod app;
pub mod database;
pub mod http_api;
pub mod logging;
pub mod partners;
pub mod travelpayouts;

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Deserializer, Serialize};

use self::app::App;
use self::database::Database;
use self::http_api::HttpApi;
use self::logging::Logging;
use self::partners::Partners;
use self::travelpayouts::Travelpayouts;
use crate::{Error, Info, CONFIG_OVERRIDE_PREFIX, CONFIG_OVERRIDE_SEPARATOR};

/// Core configuration for the backend.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Default, Clone)]
pub struct Configuration {
    #[serde(default)]
    pub app: App,

    #[serde(default)]
    pub logging: Logging,

    #[serde(default)]
    pub database: Database,

    #[serde(default)]
    pub http_api: HttpApi,

    #[serde(default)]
    pub travelpayouts: Travelpayouts,

    #[serde(default)]
    pub partners: Partners,
}

impl Configuration {
    /// Loads the configuration from the configuration file or the
    /// `TRIPCOMPARE_CONFIG_TOML` document, then applies the environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the sources cannot be read or the result does
    /// not match the configuration structure.
    pub fn load(info: &Info) -> Result<Configuration, Error> {
        let figment = if let Some(config_toml) = &info.config_toml {
            Figment::new().merge(Toml::string(config_toml))
        } else {
            Figment::new().merge(Toml::file(&info.config_toml_path))
        };

        let figment = figment.merge(Env::prefixed(CONFIG_OVERRIDE_PREFIX).split(CONFIG_OVERRIDE_SEPARATOR));

        let config: Configuration = figment.extract()?;

        Ok(config)
    }

    /// Encodes the configuration to TOML.
    ///
    /// # Errors
    ///
    /// Will return `Err` if a value cannot be represented in TOML.
    pub fn to_toml(&self) -> Result<String, Error> {
        Ok(toml::to_string(self)?)
    }
}

/// Partner identifiers are often numeric. Environment overrides are parsed
/// into typed values, so numbers are accepted and kept as text.
pub(crate) fn optional_identifier<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Identifier {
        Text(String),
        Unsigned(u64),
        Signed(i64),
    }

    Ok(Option::<Identifier>::deserialize(deserializer)?.and_then(|identifier| {
        let text = match identifier {
            Identifier::Text(text) => text,
            Identifier::Unsigned(number) => number.to_string(),
            Identifier::Signed(number) => number.to_string(),
        };
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }))
}
