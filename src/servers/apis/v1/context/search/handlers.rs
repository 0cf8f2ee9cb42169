//! API handlers for the [`search`](crate::servers::apis::v1::context::search)
//! API context.
use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Response};

use crate::core::services::{prices, search};
use crate::core::Backend;
use crate::servers::apis::v1::extractors::client_info::ExtractClientInfo;
use crate::servers::apis::v1::extractors::{Json, Query};
use crate::servers::apis::v1::responses::json_response;
use crate::travelpayouts::requests;

// Affiliate searches

pub async fn search_flights_handler(
    State(backend): State<Arc<Backend>>,
    ExtractClientInfo(client): ExtractClientInfo,
    Json(flight_search): Json<search::FlightSearch>,
) -> Response {
    match search::flights(&backend, &flight_search, &client) {
        Ok(result) => json_response(result),
        Err(e) => e.into_response(),
    }
}

pub async fn search_hotels_handler(
    State(backend): State<Arc<Backend>>,
    ExtractClientInfo(client): ExtractClientInfo,
    Json(hotel_search): Json<search::HotelSearch>,
) -> Response {
    match search::hotels(&backend, &hotel_search, &client) {
        Ok(result) => json_response(result),
        Err(e) => e.into_response(),
    }
}

pub async fn search_experiences_handler(
    State(backend): State<Arc<Backend>>,
    ExtractClientInfo(client): ExtractClientInfo,
    Query(experience_search): Query<search::ExperienceSearch>,
) -> Response {
    match search::experiences(&backend, &experience_search, &client) {
        Ok(result) => json_response(result),
        Err(e) => e.into_response(),
    }
}

pub async fn search_cars_handler(State(backend): State<Arc<Backend>>, Query(car_search): Query<search::CarSearch>) -> Response {
    match search::cars(&backend, &car_search) {
        Ok(result) => json_response(result),
        Err(e) => e.into_response(),
    }
}

pub async fn search_packages_handler(
    State(backend): State<Arc<Backend>>,
    Query(package_search): Query<search::PackageSearch>,
) -> Response {
    match search::packages(&backend, &package_search) {
        Ok(result) => json_response(result),
        Err(e) => e.into_response(),
    }
}

// Partner prices

pub async fn flight_prices_handler(State(backend): State<Arc<Backend>>, Query(query): Query<requests::CheapestPrices>) -> Response {
    match prices::cheapest(&backend, &query).await {
        Ok(prices) => json_response(prices),
        Err(e) => e.into_response(),
    }
}

pub async fn flight_calendar_handler(State(backend): State<Arc<Backend>>, Query(query): Query<requests::Calendar>) -> Response {
    match prices::calendar(&backend, &query).await {
        Ok(calendar) => json_response(calendar),
        Err(e) => e.into_response(),
    }
}

pub async fn popular_destinations_handler(
    State(backend): State<Arc<Backend>>,
    Query(query): Query<requests::PopularDestinations>,
) -> Response {
    match prices::popular(&backend, &query).await {
        Ok(destinations) => json_response(destinations),
        Err(e) => e.into_response(),
    }
}

pub async fn latest_prices_handler(State(backend): State<Arc<Backend>>, Query(query): Query<requests::LatestPrices>) -> Response {
    match prices::latest(&backend, &query).await {
        Ok(prices) => json_response(prices),
        Err(e) => e.into_response(),
    }
}

pub async fn hotel_prices_handler(State(backend): State<Arc<Backend>>, Query(query): Query<requests::HotelPrices>) -> Response {
    match prices::hotels(&backend, &query).await {
        Ok(prices) => json_response(prices),
        Err(e) => e.into_response(),
    }
}

pub async fn hotel_lookup_handler(State(backend): State<Arc<Backend>>, Query(query): Query<requests::HotelLookup>) -> Response {
    match prices::hotel_lookup(&backend, &query).await {
        Ok(locations) => json_response(locations),
        Err(e) => e.into_response(),
    }
}

pub async fn widget_config_handler(State(backend): State<Arc<Backend>>) -> Response {
    match prices::widget_config(&backend) {
        Ok(config) => json_response(config),
        Err(e) => e.into_response(),
    }
}
