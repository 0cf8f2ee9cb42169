//! API routes for the [`deal`](crate::servers::apis::v1::context::deal) API context.
//!
//! Refer to the [API endpoint documentation](crate::servers::apis::v1::context::deal).
use std::sync::Arc;

use axum::routing::{get, patch, post};
use axum::Router;

use super::handlers::{
    create_deal_handler, deal_redirect_handler, featured_deals_handler, flight_deals_handler, get_deal_handler,
    hot_deals_handler, hotel_deals_handler, list_deals_handler, package_deals_handler, track_deal_click_handler,
    update_deal_handler,
};
use crate::core::Backend;
use crate::servers::apis::v1::middlewares::auth::protect;

/// It adds the routes to the router for the [`deal`](crate::servers::apis::v1::context::deal) API context.
pub fn add(prefix: &str, router: Router, backend: Arc<Backend>) -> Router {
    let prefix = format!("{prefix}/deals");

    let admin = Router::new()
        .route(&prefix, post(create_deal_handler).with_state(backend.clone()))
        .route(&format!("{prefix}/:id"), patch(update_deal_handler).with_state(backend.clone()));

    router
        .route(&prefix, get(list_deals_handler).with_state(backend.clone()))
        // Shortcuts
        .route(&format!("{prefix}/featured"), get(featured_deals_handler).with_state(backend.clone()))
        .route(&format!("{prefix}/hot"), get(hot_deals_handler).with_state(backend.clone()))
        .route(&format!("{prefix}/flights"), get(flight_deals_handler).with_state(backend.clone()))
        .route(&format!("{prefix}/hotels"), get(hotel_deals_handler).with_state(backend.clone()))
        .route(&format!("{prefix}/packages"), get(package_deals_handler).with_state(backend.clone()))
        // A single deal
        .route(&format!("{prefix}/:id"), get(get_deal_handler).with_state(backend.clone()))
        .route(
            &format!("{prefix}/:id/click"),
            post(track_deal_click_handler).with_state(backend.clone()),
        )
        .route(
            &format!("{prefix}/:id/redirect"),
            get(deal_redirect_handler).with_state(backend.clone()),
        )
        .merge(protect(admin, &backend))
}
