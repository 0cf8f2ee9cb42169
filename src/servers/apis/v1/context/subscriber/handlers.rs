//! API handlers for the [`subscriber`](crate::servers::apis::v1::context::subscriber)
//! API context.
use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use tripcompare_primitives::pagination::Pagination;

use super::forms::{CountQueryParams, ListQueryParams, DEFAULT_LIST_LIMIT};
use super::resources::SubscriberCount;
use crate::core::subscriber::{NewSubscriber, SubscriberUpdate};
use crate::core::Backend;
use crate::servers::apis::v1::extractors::{Json, Path, Query};
use crate::servers::apis::v1::responses::{created_response, json_response, ok_response};

pub async fn subscribe_handler(State(backend): State<Arc<Backend>>, Json(new_subscriber): Json<NewSubscriber>) -> Response {
    match backend.subscribe(&new_subscriber) {
        Ok(subscriber) => created_response(subscriber),
        Err(e) => e.into_response(),
    }
}

/// Active subscribers only, unless `active_only=false`.
pub async fn list_subscribers_handler(State(backend): State<Arc<Backend>>, Query(params): Query<ListQueryParams>) -> Response {
    let pagination = Pagination::new_with_options(params.skip, Some(params.limit.unwrap_or(DEFAULT_LIST_LIMIT)));

    match backend.list_subscribers(&pagination, params.active_only.unwrap_or(true)) {
        Ok(subscribers) => json_response(subscribers),
        Err(e) => e.into_response(),
    }
}

pub async fn count_subscribers_handler(State(backend): State<Arc<Backend>>, Query(params): Query<CountQueryParams>) -> Response {
    let active_only = params.active_only.unwrap_or(true);

    match backend.count_subscribers(active_only) {
        Ok(total) => json_response(SubscriberCount { total, active_only }),
        Err(e) => e.into_response(),
    }
}

pub async fn get_subscriber_handler(State(backend): State<Arc<Backend>>, Path(email): Path<String>) -> Response {
    match backend.get_subscriber(&email) {
        Ok(subscriber) => json_response(subscriber),
        Err(e) => e.into_response(),
    }
}

pub async fn update_subscriber_handler(
    State(backend): State<Arc<Backend>>,
    Path(email): Path<String>,
    Json(update): Json<SubscriberUpdate>,
) -> Response {
    match backend.update_subscriber(&email, update) {
        Ok(subscriber) => json_response(subscriber),
        Err(e) => e.into_response(),
    }
}

pub async fn unsubscribe_handler(State(backend): State<Arc<Backend>>, Path(email): Path<String>) -> Response {
    match backend.unsubscribe(&email) {
        Ok(()) => ok_response("Successfully unsubscribed"),
        Err(e) => e.into_response(),
    }
}
