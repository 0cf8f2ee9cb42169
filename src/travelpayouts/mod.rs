//! Client for the Travelpayouts data APIs.
//!
//! Flight prices come from the Aviasales data API and hotel prices from the
//! Hotellook engine. Every request carries the configured API token; without
//! a token the client fails before sending anything.
//!
//! Operation | Endpoint
//! ---|---
//! [`cheapest_prices`](Client::cheapest_prices) | `GET {flight_api}/v1/prices/cheap` or `/v1/prices/direct`
//! [`calendar`](Client::calendar) | `GET {flight_api}/v1/prices/calendar`
//! [`city_directions`](Client::city_directions) | `GET {flight_api}/v1/city-directions`
//! [`latest_prices`](Client::latest_prices) | `GET {flight_api}/aviasales/v3/prices_for_dates`
//! [`hotel_prices`](Client::hotel_prices) | `GET {hotel_api}/api/v2/cache.json`
//! [`hotel_lookup`](Client::hotel_lookup) | `GET {hotel_api}/api/v2/lookup.json`
//!
//! Responses are returned as JSON values. [`enrich`] adds the affiliate
//! booking links.
pub mod enrich;
pub mod requests;

use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;
use tripcompare_configuration::Travelpayouts;
use tripcompare_located_error::{Located, LocatedError};
use url::Url;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Travelpayouts API not configured. Set `travelpayouts.token` to query partner prices")]
    MissingToken,

    #[error("Unable to build the Travelpayouts HTTP client: {source}")]
    Client { source: LocatedError<'static, reqwest::Error> },

    #[error("Failed to connect to Travelpayouts ({endpoint}): {source}")]
    Unreachable {
        endpoint: &'static str,
        source: LocatedError<'static, reqwest::Error>,
    },

    /// The status is forwarded to the API client.
    #[error("Travelpayouts API error: {endpoint} returned {status}")]
    UpstreamStatus { endpoint: &'static str, status: StatusCode },

    /// Like [`Error::UpstreamStatus`] but reported as a bad gateway.
    #[error("Travelpayouts API error: {endpoint} failed with {status}")]
    UpstreamFailure { endpoint: &'static str, status: StatusCode },

    #[error("Invalid response from Travelpayouts ({endpoint}): {reason}")]
    InvalidResponse { endpoint: &'static str, reason: String },
}

impl Error {
    /// Turns a forwarded upstream status into an upstream failure. Only the
    /// cheapest prices lookup forwards the partner status.
    #[must_use]
    pub fn without_forwarded_status(self) -> Self {
        match self {
            Error::UpstreamStatus { endpoint, status } => Error::UpstreamFailure { endpoint, status },
            error => error,
        }
    }
}

/// Travelpayouts data API client.
#[derive(Debug, Clone)]
pub struct Client {
    token: Option<String>,
    flight_api_url: Url,
    hotel_api_url: Url,
    request_timeout: Duration,
    lookup_timeout: Duration,
    reqwest: reqwest::Client,
}

impl Client {
    /// # Errors
    ///
    /// Will return `Err` if the HTTP client cannot be built.
    pub fn new(config: &Travelpayouts) -> Result<Self, Error> {
        let reqwest = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Client { source: Located(e).into() })?;

        Ok(Self {
            token: config.token.clone().filter(|token| !token.trim().is_empty()),
            flight_api_url: config.flight_api_url.clone(),
            hotel_api_url: config.hotel_api_url.clone(),
            request_timeout: Duration::from_secs(config.request_timeout_secs),
            lookup_timeout: Duration::from_secs(config.lookup_timeout_secs),
            reqwest,
        })
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.token.is_some()
    }

    /// # Errors
    ///
    /// Will return `Err` if no token is configured.
    pub fn token(&self) -> Result<&str, Error> {
        self.token.as_deref().ok_or(Error::MissingToken)
    }

    /// # Errors
    ///
    /// Will return `Err` if the token is missing or the request fails.
    pub async fn cheapest_prices(&self, query: &requests::CheapestPrices) -> Result<Value, Error> {
        let endpoint = if query.direct { "v1/prices/direct" } else { "v1/prices/cheap" };

        self.get(&self.flight_api_url, endpoint, query.params(), self.request_timeout)
            .await
    }

    /// # Errors
    ///
    /// Will return `Err` if the token is missing or the request fails.
    pub async fn calendar(&self, query: &requests::Calendar) -> Result<Value, Error> {
        self.get(&self.flight_api_url, "v1/prices/calendar", query.params(), self.request_timeout)
            .await
    }

    /// # Errors
    ///
    /// Will return `Err` if the token is missing or the request fails.
    pub async fn city_directions(&self, query: &requests::PopularDestinations) -> Result<Value, Error> {
        self.get(&self.flight_api_url, "v1/city-directions", query.params(), self.request_timeout)
            .await
    }

    /// # Errors
    ///
    /// Will return `Err` if the token is missing or the request fails.
    pub async fn latest_prices(&self, query: &requests::LatestPrices) -> Result<Value, Error> {
        self.get(
            &self.flight_api_url,
            "aviasales/v3/prices_for_dates",
            query.params(),
            self.request_timeout,
        )
        .await
    }

    /// # Errors
    ///
    /// Will return `Err` if the token is missing or the request fails.
    pub async fn hotel_prices(&self, query: &requests::HotelPrices) -> Result<Value, Error> {
        self.get(&self.hotel_api_url, "api/v2/cache.json", query.params(), self.request_timeout)
            .await
    }

    /// # Errors
    ///
    /// Will return `Err` if the token is missing or the request fails.
    pub async fn hotel_lookup(&self, query: &requests::HotelLookup) -> Result<Value, Error> {
        self.get(&self.hotel_api_url, "api/v2/lookup.json", query.params(), self.lookup_timeout)
            .await
    }

    async fn get(
        &self,
        base_url: &Url,
        endpoint: &'static str,
        mut params: Vec<(&'static str, String)>,
        timeout: Duration,
    ) -> Result<Value, Error> {
        params.push(("token", self.token()?.to_owned()));

        let url = Self::build_url(base_url, endpoint);

        debug!(target: "TRAVELPAYOUTS", "GET {url}");

        let response = self
            .reqwest
            .get(url)
            .query(&params)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| Error::Unreachable {
                endpoint,
                source: Located(e).into(),
            })?;

        let status = response.status();

        if !status.is_success() {
            return Err(Error::UpstreamStatus { endpoint, status });
        }

        response.json::<Value>().await.map_err(|e| Error::InvalidResponse {
            endpoint,
            reason: e.to_string(),
        })
    }

    fn build_url(base_url: &Url, endpoint: &str) -> String {
        format!("{}/{endpoint}", base_url.as_str().trim_end_matches('/'))
    }
}
