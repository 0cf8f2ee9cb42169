//! API handlers for the [`destination`](crate::servers::apis::v1::context::destination)
//! API context.
use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use tripcompare_primitives::pagination::Pagination;

use super::forms::{LimitQueryParams, ListQueryParams, SearchQueryParams, DEFAULT_LIST_LIMIT};
use crate::core::destination::{
    DestinationUpdate, NewDestination, DEFAULT_DEALS_LIMIT, DEFAULT_FEATURED_LIMIT, DEFAULT_SEARCH_LIMIT,
};
use crate::core::Backend;
use crate::servers::apis::v1::extractors::{Json, Path, Query};
use crate::servers::apis::v1::responses::{created_response, json_response};

pub async fn create_destination_handler(
    State(backend): State<Arc<Backend>>,
    Json(destination): Json<NewDestination>,
) -> Response {
    match backend.create_destination(&destination) {
        Ok(destination) => created_response(destination),
        Err(e) => e.into_response(),
    }
}

pub async fn list_destinations_handler(State(backend): State<Arc<Backend>>, Query(params): Query<ListQueryParams>) -> Response {
    let pagination = Pagination::new_with_options(params.skip, Some(params.limit.unwrap_or(DEFAULT_LIST_LIMIT)));

    match backend.list_destinations(&pagination, params.featured_only.unwrap_or_default()) {
        Ok(destinations) => json_response(destinations),
        Err(e) => e.into_response(),
    }
}

pub async fn search_destinations_handler(
    State(backend): State<Arc<Backend>>,
    Query(params): Query<SearchQueryParams>,
) -> Response {
    match backend.search_destinations(&params.q, params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT)) {
        Ok(destinations) => json_response(destinations),
        Err(e) => e.into_response(),
    }
}

pub async fn featured_destinations_handler(
    State(backend): State<Arc<Backend>>,
    Query(params): Query<LimitQueryParams>,
) -> Response {
    match backend.featured_destinations(params.limit.unwrap_or(DEFAULT_FEATURED_LIMIT)) {
        Ok(destinations) => json_response(destinations),
        Err(e) => e.into_response(),
    }
}

pub async fn get_destination_handler(State(backend): State<Arc<Backend>>, Path(id): Path<i64>) -> Response {
    match backend.get_destination(id) {
        Ok(destination) => json_response(destination),
        Err(e) => e.into_response(),
    }
}

pub async fn update_destination_handler(
    State(backend): State<Arc<Backend>>,
    Path(id): Path<i64>,
    Json(update): Json<DestinationUpdate>,
) -> Response {
    match backend.update_destination(id, update) {
        Ok(destination) => json_response(destination),
        Err(e) => e.into_response(),
    }
}

pub async fn destination_deals_handler(
    State(backend): State<Arc<Backend>>,
    Path(id): Path<i64>,
    Query(params): Query<LimitQueryParams>,
) -> Response {
    match backend.destination_deals(id, params.limit.unwrap_or(DEFAULT_DEALS_LIMIT)) {
        Ok(deals) => json_response(deals),
        Err(e) => e.into_response(),
    }
}
