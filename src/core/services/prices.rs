//! Live partner prices.
//!
//! Each lookup validates the query, checks that the partner credentials are
//! configured, forwards the query to the Travelpayouts data API and adds
//! affiliate booking links to the fares it returns. Responses are never
//! cached.
//!
//! An error status from the partner is forwarded by the cheapest prices
//! lookup. The other lookups report it as a bad gateway.
use serde_json::Value;

use crate::affiliate::widget::WidgetConfig;
use crate::core::error::Error;
use crate::core::{validation, Backend};
use crate::travelpayouts::enrich::{self, HotelPrices, PopularDestinations};
use crate::travelpayouts::{self, requests};

/// Cheapest or non-stop fares for a route.
///
/// # Errors
///
/// Will return `Err` if a code is not three letters, a credential is missing
/// or the partner API fails.
pub async fn cheapest(backend: &Backend, query: &requests::CheapestPrices) -> Result<Value, Error> {
    validation::iata("origin", &query.origin)?;
    validation::iata("destination", &query.destination)?;

    backend.partner_api().token()?;
    let marker = backend.links().marker()?;

    let response = backend.partner_api().cheapest_prices(query).await?;

    Ok(enrich::cheapest_prices(response, &query.origin, marker))
}

/// Fares for every day of a month. Returned as sent by the partner.
///
/// # Errors
///
/// Will return `Err` if a code is not three letters, the token is missing or
/// the partner API fails.
pub async fn calendar(backend: &Backend, query: &requests::Calendar) -> Result<Value, Error> {
    validation::iata("origin", &query.origin)?;
    validation::iata("destination", &query.destination)?;

    Ok(backend
        .partner_api()
        .calendar(query)
        .await
        .map_err(travelpayouts::Error::without_forwarded_status)?)
}

/// Where to fly from an origin, cheapest first.
///
/// # Errors
///
/// Will return `Err` if the origin is not three letters, a credential is
/// missing or the partner API fails.
pub async fn popular(backend: &Backend, query: &requests::PopularDestinations) -> Result<PopularDestinations, Error> {
    validation::iata("origin", &query.origin)?;

    backend.partner_api().token()?;
    let marker = backend.links().marker()?;

    let response = backend
        .partner_api()
        .city_directions(query)
        .await
        .map_err(travelpayouts::Error::without_forwarded_status)?;

    Ok(enrich::popular_destinations(&response, &query.origin, marker))
}

/// Most recently found fares for a route.
///
/// # Errors
///
/// Will return `Err` if a code is not three letters, the limit is outside
/// `1..=100`, a credential is missing or the partner API fails.
pub async fn latest(backend: &Backend, query: &requests::LatestPrices) -> Result<Value, Error> {
    validation::iata("origin", &query.origin)?;
    validation::iata("destination", &query.destination)?;
    validation::range("limit", query.limit, 1, 100)?;

    backend.partner_api().token()?;
    let marker = backend.links().marker()?;

    let response = backend
        .partner_api()
        .latest_prices(query)
        .await
        .map_err(travelpayouts::Error::without_forwarded_status)?;

    Ok(enrich::latest_prices(response, &query.origin, &query.destination, marker))
}

/// Cached hotel prices for a city.
///
/// # Errors
///
/// Will return `Err` if the adults are outside `1..=6`, the limit is outside
/// `1..=100`, a credential is missing or the partner API fails.
pub async fn hotels(backend: &Backend, query: &requests::HotelPrices) -> Result<HotelPrices, Error> {
    validation::length("location", &query.location, 1, 100)?;
    validation::range("adults", query.adults, 1, 6)?;
    validation::range("limit", query.limit, 1, 100)?;

    backend.partner_api().token()?;
    let marker = backend.links().marker()?;

    let response = backend
        .partner_api()
        .hotel_prices(query)
        .await
        .map_err(travelpayouts::Error::without_forwarded_status)?;

    Ok(enrich::hotel_prices(
        response,
        &query.location,
        query.check_in,
        query.check_out,
        query.adults,
        marker,
    ))
}

/// Hotel and city name suggestions.
///
/// # Errors
///
/// Will return `Err` if the query is shorter than two characters, the limit
/// is outside `1..=50`, the token is missing or the partner API fails.
pub async fn hotel_lookup(backend: &Backend, query: &requests::HotelLookup) -> Result<Value, Error> {
    validation::length("query", &query.query, 2, 200)?;
    validation::range("limit", query.limit, 1, 50)?;

    Ok(backend
        .partner_api()
        .hotel_lookup(query)
        .await
        .map_err(travelpayouts::Error::without_forwarded_status)?)
}

/// Embeddable search widgets.
///
/// # Errors
///
/// Will return `Err` if no marker is configured.
pub fn widget_config(backend: &Backend) -> Result<WidgetConfig, Error> {
    Ok(backend.links().widget_config()?)
}
