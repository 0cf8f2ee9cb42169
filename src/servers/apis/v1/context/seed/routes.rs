//! API routes for the [`seed`](crate::servers::apis::v1::context::seed) API context.
use std::sync::Arc;

use axum::routing::post;
use axum::Router;

use super::handlers::seed_handler;
use crate::core::Backend;
use crate::servers::apis::v1::middlewares::auth::protect;

/// It adds the routes to the router for the [`seed`](crate::servers::apis::v1::context::seed) API context.
pub fn add(prefix: &str, router: Router, backend: Arc<Backend>) -> Router {
    let admin = Router::new().route(&format!("{prefix}/seed"), post(seed_handler).with_state(backend.clone()));

    router.merge(protect(admin, &backend))
}
