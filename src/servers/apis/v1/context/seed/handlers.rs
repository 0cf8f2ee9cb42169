//! API handlers for the [`seed`](crate::servers::apis::v1::context::seed)
//! API context.
use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Response};

use super::resources::Seeded;
use crate::core::Backend;
use crate::servers::apis::v1::responses::json_response;

pub async fn seed_handler(State(backend): State<Arc<Backend>>) -> Response {
    match backend.seed() {
        Ok(report) => json_response(Seeded::from(report)),
        Err(e) => e.into_response(),
    }
}
