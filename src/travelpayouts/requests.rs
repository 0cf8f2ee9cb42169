//! Query parameters of the Travelpayouts data API operations.
//!
//! They deserialize from the query string of the REST API and serialize
//! into the outbound request, without the `token`.
use chrono::NaiveDate;
use serde::Deserialize;

pub const DEFAULT_CURRENCY: &str = "EUR";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_LATEST_PRICES_LIMIT: u32 = 30;
pub const DEFAULT_HOTEL_PRICES_LIMIT: u32 = 20;
pub const DEFAULT_HOTEL_LOOKUP_LIMIT: u32 = 10;
pub const DEFAULT_HOTEL_ADULTS: u8 = 2;

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_owned()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_owned()
}

fn default_latest_prices_limit() -> u32 {
    DEFAULT_LATEST_PRICES_LIMIT
}

fn default_hotel_prices_limit() -> u32 {
    DEFAULT_HOTEL_PRICES_LIMIT
}

fn default_hotel_lookup_limit() -> u32 {
    DEFAULT_HOTEL_LOOKUP_LIMIT
}

fn default_hotel_adults() -> u8 {
    DEFAULT_HOTEL_ADULTS
}

/// Cheapest tickets for a route. Months are `YYYY-MM`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CheapestPrices {
    pub origin: String,
    pub destination: String,
    pub depart_date: Option<String>,
    pub return_date: Option<String>,
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Non-stop flights only.
    #[serde(default)]
    pub direct: bool,
}

impl CheapestPrices {
    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("origin", self.origin.to_uppercase()),
            ("destination", self.destination.to_uppercase()),
            ("currency", self.currency.clone()),
        ];

        if let Some(depart_date) = &self.depart_date {
            params.push(("depart_date", depart_date.clone()));
        }
        if let Some(return_date) = &self.return_date {
            params.push(("return_date", return_date.clone()));
        }

        params
    }
}

/// Prices for every day of a month, starting at `depart_date` (`YYYY-MM-DD`).
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    pub origin: String,
    pub destination: String,
    pub depart_date: String,
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Calendar {
    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("origin", self.origin.to_uppercase()),
            ("destination", self.destination.to_uppercase()),
            ("depart_date", self.depart_date.clone()),
            ("currency", self.currency.clone()),
        ]
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PopularDestinations {
    pub origin: String,
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl PopularDestinations {
    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        vec![("origin", self.origin.to_uppercase()), ("currency", self.currency.clone())]
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LatestPrices {
    pub origin: String,
    pub destination: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_latest_prices_limit")]
    pub limit: u32,
    #[serde(default)]
    pub one_way: bool,
}

impl LatestPrices {
    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("origin", self.origin.to_uppercase()),
            ("destination", self.destination.to_uppercase()),
            ("currency", self.currency.clone()),
            ("limit", self.limit.to_string()),
            ("one_way", self.one_way.to_string()),
        ]
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HotelPrices {
    /// City name, for example `Barcelona`.
    pub location: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(default = "default_hotel_adults")]
    pub adults: u8,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_hotel_prices_limit")]
    pub limit: u32,
}

impl HotelPrices {
    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("location", self.location.clone()),
            ("checkIn", self.check_in.to_string()),
            ("checkOut", self.check_out.to_string()),
            ("adults", self.adults.to_string()),
            ("currency", self.currency.clone()),
            ("limit", self.limit.to_string()),
        ]
    }
}

/// Autocomplete of hotel and city names.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HotelLookup {
    pub query: String,
    #[serde(default = "default_language")]
    pub lang: String,
    #[serde(default = "default_hotel_lookup_limit")]
    pub limit: u32,
}

impl HotelLookup {
    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("query", self.query.clone()),
            ("lang", self.lang.clone()),
            ("limit", self.limit.to_string()),
        ]
    }
}
