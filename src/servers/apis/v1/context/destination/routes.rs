//! API routes for the [`destination`](crate::servers::apis::v1::context::destination) API context.
//!
//! Refer to the [API endpoint documentation](crate::servers::apis::v1::context::destination).
use std::sync::Arc;

use axum::routing::{get, patch, post};
use axum::Router;

use super::handlers::{
    create_destination_handler, destination_deals_handler, featured_destinations_handler, get_destination_handler,
    list_destinations_handler, search_destinations_handler, update_destination_handler,
};
use crate::core::Backend;
use crate::servers::apis::v1::middlewares::auth::protect;

/// It adds the routes to the router for the [`destination`](crate::servers::apis::v1::context::destination) API context.
pub fn add(prefix: &str, router: Router, backend: Arc<Backend>) -> Router {
    let prefix = format!("{prefix}/destinations");

    let admin = Router::new()
        .route(&prefix, post(create_destination_handler).with_state(backend.clone()))
        .route(
            &format!("{prefix}/:id"),
            patch(update_destination_handler).with_state(backend.clone()),
        );

    router
        .route(&prefix, get(list_destinations_handler).with_state(backend.clone()))
        .route(
            &format!("{prefix}/search"),
            get(search_destinations_handler).with_state(backend.clone()),
        )
        .route(
            &format!("{prefix}/featured"),
            get(featured_destinations_handler).with_state(backend.clone()),
        )
        .route(&format!("{prefix}/:id"), get(get_destination_handler).with_state(backend.clone()))
        .route(
            &format!("{prefix}/:id/deals"),
            get(destination_deals_handler).with_state(backend.clone()),
        )
        .merge(protect(admin, &backend))
}
