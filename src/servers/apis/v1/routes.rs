//! Route initialization for the v1 API.
use std::sync::Arc;

use axum::Router;

use super::context::{analytics, deal, destination, experience, search, seed, subscriber};
use crate::core::Backend;

/// Add the routes for the v1 API.
pub fn add(prefix: &str, router: Router, backend: Arc<Backend>) -> Router {
    let v1_prefix = format!("{prefix}/v1");

    let router = subscriber::routes::add(&v1_prefix, router, backend.clone());
    let router = destination::routes::add(&v1_prefix, router, backend.clone());
    let router = deal::routes::add(&v1_prefix, router, backend.clone());
    let router = experience::routes::add(&v1_prefix, router, backend.clone());
    let router = search::routes::add(&v1_prefix, router, backend.clone());
    let router = analytics::routes::add(&v1_prefix, router, backend.clone());
    seed::routes::add(&v1_prefix, router, backend)
}
