//! API routes for the [`subscriber`](crate::servers::apis::v1::context::subscriber) API context.
//!
//! - `POST /subscribers`
//! - `GET /subscribers` (admin)
//! - `GET /subscribers/count/total` (admin)
//! - `GET /subscribers/:email`
//! - `PATCH /subscribers/:email`
//! - `DELETE /subscribers/:email`
//!
//! Refer to the [API endpoint documentation](crate::servers::apis::v1::context::subscriber).
use std::sync::Arc;

use axum::routing::{delete, get, patch, post};
use axum::Router;

use super::handlers::{
    count_subscribers_handler, get_subscriber_handler, list_subscribers_handler, subscribe_handler, unsubscribe_handler,
    update_subscriber_handler,
};
use crate::core::Backend;
use crate::servers::apis::v1::middlewares::auth::protect;

/// It adds the routes to the router for the [`subscriber`](crate::servers::apis::v1::context::subscriber) API context.
pub fn add(prefix: &str, router: Router, backend: Arc<Backend>) -> Router {
    let prefix = format!("{prefix}/subscribers");

    let admin = Router::new()
        .route(&prefix, get(list_subscribers_handler).with_state(backend.clone()))
        .route(
            &format!("{prefix}/count/total"),
            get(count_subscribers_handler).with_state(backend.clone()),
        );

    router
        .route(&prefix, post(subscribe_handler).with_state(backend.clone()))
        .route(&format!("{prefix}/:email"), get(get_subscriber_handler).with_state(backend.clone()))
        .route(
            &format!("{prefix}/:email"),
            patch(update_subscriber_handler).with_state(backend.clone()),
        )
        .route(&format!("{prefix}/:email"), delete(unsubscribe_handler).with_state(backend.clone()))
        .merge(protect(admin, &backend))
}
