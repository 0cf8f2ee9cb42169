use serde::{Deserialize, Serialize};
use url::Url;

/// Credentials and endpoints of the Travelpayouts affiliate network
/// (Aviasales flights and Hotellook hotels).
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Travelpayouts {
    /// API token sent with every data API request.
    #[serde(default, deserialize_with = "super::optional_identifier", skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Affiliate marker appended to every outbound search link.
    #[serde(default, deserialize_with = "super::optional_identifier", skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,

    /// Host registered in the affiliate program.
    #[serde(default = "Travelpayouts::default_host")]
    pub host: String,

    /// Base URL of the flight data API.
    #[serde(default = "Travelpayouts::default_flight_api_url")]
    pub flight_api_url: Url,

    /// Base URL of the hotel data API.
    #[serde(default = "Travelpayouts::default_hotel_api_url")]
    pub hotel_api_url: Url,

    /// Timeout in seconds for price requests.
    #[serde(default = "Travelpayouts::default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Timeout in seconds for hotel lookups.
    #[serde(default = "Travelpayouts::default_lookup_timeout_secs")]
    pub lookup_timeout_secs: u64,
}

impl Default for Travelpayouts {
    fn default() -> Self {
        Self {
            token: None,
            marker: None,
            host: Self::default_host(),
            flight_api_url: Self::default_flight_api_url(),
            hotel_api_url: Self::default_hotel_api_url(),
            request_timeout_secs: Self::default_request_timeout_secs(),
            lookup_timeout_secs: Self::default_lookup_timeout_secs(),
        }
    }
}

impl Travelpayouts {
    fn default_host() -> String {
        String::from("tripcompare.eu")
    }

    #[allow(clippy::missing_panics_doc)]
    fn default_flight_api_url() -> Url {
        Url::parse("https://api.travelpayouts.com").expect("the default flight API URL should be valid")
    }

    #[allow(clippy::missing_panics_doc)]
    fn default_hotel_api_url() -> Url {
        Url::parse("https://engine.hotellook.com").expect("the default hotel API URL should be valid")
    }

    fn default_request_timeout_secs() -> u64 {
        30
    }

    fn default_lookup_timeout_secs() -> u64 {
        15
    }
}
