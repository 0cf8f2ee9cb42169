//! Affiliate link generation.
//!
//! Every outbound search link carries the identifier of the affiliate
//! program so the partner attributes the booking to the site:
//!
//! Partner | Builder | Identifier
//! ---|---|---
//! Aviasales (flights, packages) | [`aviasales`] | Travelpayouts marker
//! Hotellook (hotels) | [`hotellook`] | Travelpayouts marker
//! RentalCars (cars) | [`rentalcars`] | Travelpayouts marker
//! GetYourGuide (experiences) | [`getyourguide`] | GetYourGuide partner id
//!
//! The builders are pure functions. [`LinkBuilder`] binds them to the
//! configured identifiers and refuses to build a link when the identifier is
//! missing, so the site never emits an untracked link.
pub mod aviasales;
pub mod getyourguide;
pub mod hotellook;
pub mod rentalcars;
pub mod widget;

use chrono::NaiveDate;
use derive_more::Display;
use tripcompare_configuration::{Partners, Travelpayouts};
use url::form_urlencoded;

use self::widget::WidgetConfig;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Travelpayouts marker not configured. Set `travelpayouts.marker` to generate affiliate links")]
    MissingMarker,

    #[error("{partner} partner id not configured")]
    MissingPartnerId { partner: &'static str },

    #[error("Invalid time `{value}`, expected HH:MM")]
    InvalidTime { value: String },
}

/// Travelpayouts affiliate marker.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub struct Marker(String);

impl Marker {
    /// Returns `None` for blank markers.
    #[must_use]
    pub fn new(value: &str) -> Option<Self> {
        let value = value.trim();

        if value.is_empty() {
            None
        } else {
            Some(Self(value.to_owned()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Form-urlencodes `pairs` in order, with spaces as `+`.
pub(crate) fn encode_query(pairs: &[(&str, &str)]) -> String {
    form_urlencoded::Serializer::new(String::new()).extend_pairs(pairs).finish()
}

/// ISO date as used in partner query strings.
pub(crate) fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Builds partner links with the configured affiliate identifiers.
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    marker: Option<Marker>,
    getyourguide_partner_id: Option<String>,
    token_configured: bool,
}

impl LinkBuilder {
    #[must_use]
    pub fn new(travelpayouts: &Travelpayouts, partners: &Partners) -> Self {
        Self {
            marker: travelpayouts.marker.as_deref().and_then(Marker::new),
            getyourguide_partner_id: partners
                .getyourguide_partner_id
                .as_deref()
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(ToOwned::to_owned),
            token_configured: travelpayouts.token.as_deref().is_some_and(|token| !token.trim().is_empty()),
        }
    }

    /// # Errors
    ///
    /// Will return `Err` if no marker is configured.
    pub fn marker(&self) -> Result<&Marker, Error> {
        self.marker.as_ref().ok_or(Error::MissingMarker)
    }

    /// Aviasales search link. `travelers` is the last digit of the path.
    ///
    /// # Errors
    ///
    /// Will return `Err` if no marker is configured.
    pub fn flight(
        &self,
        origin: &str,
        destination: &str,
        departure: NaiveDate,
        return_date: Option<NaiveDate>,
        travelers: u8,
    ) -> Result<String, Error> {
        let path = aviasales::search_path(origin, destination, departure, return_date, travelers);
        Ok(aviasales::search_url(&path, self.marker()?))
    }

    /// # Errors
    ///
    /// Will return `Err` if no marker is configured.
    pub fn hotel(&self, destination: &str, check_in: NaiveDate, check_out: NaiveDate, adults: u8) -> Result<String, Error> {
        Ok(hotellook::search_url(destination, check_in, check_out, adults, self.marker()?))
    }

    /// # Errors
    ///
    /// Will return `Err` if no GetYourGuide partner id is configured.
    pub fn experience(&self, destination: &str, date: Option<NaiveDate>) -> Result<String, Error> {
        let partner_id = self
            .getyourguide_partner_id
            .as_deref()
            .ok_or(Error::MissingPartnerId { partner: "GetYourGuide" })?;

        Ok(getyourguide::search_url(destination, date, partner_id))
    }

    /// # Errors
    ///
    /// Will return `Err` if no marker is configured or a time is not `HH:MM`.
    pub fn car_rental(&self, pickup_location: &str, pickup: rentalcars::Moment<'_>, dropoff: rentalcars::Moment<'_>) -> Result<String, Error> {
        rentalcars::search_url(pickup_location, pickup, dropoff, self.marker()?)
    }

    /// Flight and hotel package, sent to an Aviasales round trip.
    ///
    /// # Errors
    ///
    /// Will return `Err` if no marker is configured.
    pub fn package(
        &self,
        origin: &str,
        destination: &str,
        departure: NaiveDate,
        return_date: NaiveDate,
        travelers: u8,
    ) -> Result<String, Error> {
        self.flight(origin, destination, departure, Some(return_date), travelers)
    }

    /// # Errors
    ///
    /// Will return `Err` if no marker is configured.
    pub fn widget_config(&self) -> Result<WidgetConfig, Error> {
        Ok(widget::config(self.marker()?, self.token_configured))
    }

    #[must_use]
    pub fn is_token_configured(&self) -> bool {
        self.token_configured
    }
}
