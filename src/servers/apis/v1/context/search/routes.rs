//! API routes for the [`search`](crate::servers::apis::v1::context::search) API context.
//!
//! Refer to the [API endpoint documentation](crate::servers::apis::v1::context::search).
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    flight_calendar_handler, flight_prices_handler, hotel_lookup_handler, hotel_prices_handler, latest_prices_handler,
    popular_destinations_handler, search_cars_handler, search_experiences_handler, search_flights_handler,
    search_hotels_handler, search_packages_handler, widget_config_handler,
};
use crate::core::Backend;

/// It adds the routes to the router for the [`search`](crate::servers::apis::v1::context::search) API context.
pub fn add(prefix: &str, router: Router, backend: Arc<Backend>) -> Router {
    let prefix = format!("{prefix}/search");

    router
        // Flights
        .route(&format!("{prefix}/flights"), post(search_flights_handler).with_state(backend.clone()))
        .route(
            &format!("{prefix}/flights/prices"),
            get(flight_prices_handler).with_state(backend.clone()),
        )
        .route(
            &format!("{prefix}/flights/calendar"),
            get(flight_calendar_handler).with_state(backend.clone()),
        )
        .route(
            &format!("{prefix}/flights/popular"),
            get(popular_destinations_handler).with_state(backend.clone()),
        )
        .route(
            &format!("{prefix}/flights/latest"),
            get(latest_prices_handler).with_state(backend.clone()),
        )
        // Hotels
        .route(&format!("{prefix}/hotels"), post(search_hotels_handler).with_state(backend.clone()))
        .route(
            &format!("{prefix}/hotels/prices"),
            get(hotel_prices_handler).with_state(backend.clone()),
        )
        .route(
            &format!("{prefix}/hotels/lookup"),
            get(hotel_lookup_handler).with_state(backend.clone()),
        )
        // Other partners
        .route(
            &format!("{prefix}/experiences"),
            get(search_experiences_handler).with_state(backend.clone()),
        )
        .route(&format!("{prefix}/cars"), get(search_cars_handler).with_state(backend.clone()))
        .route(&format!("{prefix}/packages"), post(search_packages_handler).with_state(backend.clone()))
        .route(&format!("{prefix}/widget/config"), get(widget_config_handler).with_state(backend))
}
