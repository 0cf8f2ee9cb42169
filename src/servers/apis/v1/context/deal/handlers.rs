//! API handlers for the [`deal`](crate::servers::apis::v1::context::deal)
//! API context.
use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use tripcompare_primitives::deal_type::DealType;
use tripcompare_primitives::pagination::Pagination;

use super::forms::{LimitQueryParams, ListQueryParams};
use super::resources::Redirect;
use crate::core::deal::{DealFilter, DealUpdate, NewDeal, DEFAULT_FEATURED_LIMIT, DEFAULT_SHORTCUT_LIMIT};
use crate::core::Backend;
use crate::servers::apis::v1::extractors::client_info::ExtractClientInfo;
use crate::servers::apis::v1::extractors::{Json, Path, Query};
use crate::servers::apis::v1::responses::{created_response, json_response, ok_response};

pub async fn create_deal_handler(State(backend): State<Arc<Backend>>, Json(deal): Json<NewDeal>) -> Response {
    match backend.create_deal(&deal) {
        Ok(deal) => created_response(deal),
        Err(e) => e.into_response(),
    }
}

pub async fn list_deals_handler(State(backend): State<Arc<Backend>>, Query(params): Query<ListQueryParams>) -> Response {
    let filter = DealFilter {
        deal_type: params.deal_type,
        featured_only: params.featured_only.unwrap_or_default(),
        ..Default::default()
    };

    match backend.list_deals(&filter, &Pagination::new_with_options(params.skip, params.limit)) {
        Ok(deals) => json_response(deals),
        Err(e) => e.into_response(),
    }
}

pub async fn featured_deals_handler(State(backend): State<Arc<Backend>>, Query(params): Query<LimitQueryParams>) -> Response {
    let pagination = Pagination::new(0, params.limit.unwrap_or(DEFAULT_FEATURED_LIMIT));

    match backend.list_deals(&DealFilter::featured(), &pagination) {
        Ok(deals) => json_response(deals),
        Err(e) => e.into_response(),
    }
}

pub async fn hot_deals_handler(State(backend): State<Arc<Backend>>, Query(params): Query<LimitQueryParams>) -> Response {
    match backend.hot_deals(params.limit.unwrap_or(DEFAULT_SHORTCUT_LIMIT)) {
        Ok(deals) => json_response(deals),
        Err(e) => e.into_response(),
    }
}

pub async fn flight_deals_handler(State(backend): State<Arc<Backend>>, Query(params): Query<LimitQueryParams>) -> Response {
    deals_of_type(&backend, DealType::Flight, &params)
}

pub async fn hotel_deals_handler(State(backend): State<Arc<Backend>>, Query(params): Query<LimitQueryParams>) -> Response {
    deals_of_type(&backend, DealType::Hotel, &params)
}

pub async fn package_deals_handler(State(backend): State<Arc<Backend>>, Query(params): Query<LimitQueryParams>) -> Response {
    deals_of_type(&backend, DealType::Package, &params)
}

fn deals_of_type(backend: &Backend, deal_type: DealType, params: &LimitQueryParams) -> Response {
    let pagination = Pagination::new(0, params.limit.unwrap_or(DEFAULT_SHORTCUT_LIMIT));

    match backend.list_deals(&DealFilter::of_type(deal_type), &pagination) {
        Ok(deals) => json_response(deals),
        Err(e) => e.into_response(),
    }
}

pub async fn get_deal_handler(State(backend): State<Arc<Backend>>, Path(id): Path<i64>) -> Response {
    match backend.get_deal(id) {
        Ok(deal) => json_response(deal),
        Err(e) => e.into_response(),
    }
}

pub async fn update_deal_handler(
    State(backend): State<Arc<Backend>>,
    Path(id): Path<i64>,
    Json(update): Json<DealUpdate>,
) -> Response {
    match backend.update_deal(id, update) {
        Ok(deal) => json_response(deal),
        Err(e) => e.into_response(),
    }
}

pub async fn track_deal_click_handler(
    State(backend): State<Arc<Backend>>,
    Path(id): Path<i64>,
    ExtractClientInfo(client): ExtractClientInfo,
) -> Response {
    match backend.track_deal_click(id, &client) {
        Ok(_) => ok_response("Click tracked"),
        Err(e) => e.into_response(),
    }
}

pub async fn deal_redirect_handler(
    State(backend): State<Arc<Backend>>,
    Path(id): Path<i64>,
    ExtractClientInfo(client): ExtractClientInfo,
) -> Response {
    match backend.deal_redirect(id, &client) {
        Ok(affiliate_link) => json_response(Redirect { affiliate_link }),
        Err(e) => e.into_response(),
    }
}
