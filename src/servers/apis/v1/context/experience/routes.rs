//! API routes for the [`experience`](crate::servers::apis::v1::context::experience) API context.
//!
//! Refer to the [API endpoint documentation](crate::servers::apis::v1::context::experience).
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    create_experience_handler, experience_categories_handler, get_experience_handler, list_experiences_handler,
    top_rated_experiences_handler, track_experience_click_handler,
};
use crate::core::Backend;
use crate::servers::apis::v1::middlewares::auth::protect;

/// It adds the routes to the router for the [`experience`](crate::servers::apis::v1::context::experience) API context.
pub fn add(prefix: &str, router: Router, backend: Arc<Backend>) -> Router {
    let prefix = format!("{prefix}/experiences");

    let admin = Router::new().route(&prefix, post(create_experience_handler).with_state(backend.clone()));

    router
        .route(&prefix, get(list_experiences_handler).with_state(backend.clone()))
        .route(
            &format!("{prefix}/categories"),
            get(experience_categories_handler).with_state(backend.clone()),
        )
        .route(
            &format!("{prefix}/top-rated"),
            get(top_rated_experiences_handler).with_state(backend.clone()),
        )
        .route(&format!("{prefix}/:id"), get(get_experience_handler).with_state(backend.clone()))
        .route(
            &format!("{prefix}/:id/click"),
            post(track_experience_click_handler).with_state(backend.clone()),
        )
        .merge(protect(admin, &backend))
}
