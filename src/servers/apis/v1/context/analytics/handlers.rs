//! API handlers for the [`analytics`](crate::servers::apis::v1::context::analytics)
//! API context.
use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Response};

use super::forms::{EmailQueryParams, LimitQueryParams, PeriodQueryParams};
use super::resources::{AlertDeletion, PriceAlerts};
use crate::core::price_alert::NewPriceAlert;
use crate::core::services::analytics::{self, RevenueQuery, DEFAULT_PERIOD_DAYS, DEFAULT_TOP_DESTINATIONS};
use crate::core::Backend;
use crate::servers::apis::v1::extractors::{Json, Path, Query};
use crate::servers::apis::v1::responses::{created_response, json_response};

pub async fn dashboard_handler(State(backend): State<Arc<Backend>>, Query(params): Query<PeriodQueryParams>) -> Response {
    match analytics::dashboard(&backend, params.days.unwrap_or(DEFAULT_PERIOD_DAYS)) {
        Ok(dashboard) => json_response(dashboard),
        Err(e) => e.into_response(),
    }
}

pub async fn click_analytics_handler(State(backend): State<Arc<Backend>>, Query(params): Query<PeriodQueryParams>) -> Response {
    match analytics::clicks(&backend, params.days.unwrap_or(DEFAULT_PERIOD_DAYS)) {
        Ok(clicks) => json_response(clicks),
        Err(e) => e.into_response(),
    }
}

pub async fn subscriber_analytics_handler(State(backend): State<Arc<Backend>>) -> Response {
    match analytics::subscribers(&backend) {
        Ok(subscribers) => json_response(subscribers),
        Err(e) => e.into_response(),
    }
}

pub async fn destination_analytics_handler(
    State(backend): State<Arc<Backend>>,
    Query(params): Query<LimitQueryParams>,
) -> Response {
    match analytics::destinations(&backend, params.limit.unwrap_or(DEFAULT_TOP_DESTINATIONS)) {
        Ok(destinations) => json_response(destinations),
        Err(e) => e.into_response(),
    }
}

pub async fn revenue_estimate_handler(Query(query): Query<RevenueQuery>) -> Response {
    match analytics::revenue_estimate(&query) {
        Ok(estimate) => json_response(estimate),
        Err(e) => e.into_response(),
    }
}

// Price alerts

pub async fn create_price_alert_handler(State(backend): State<Arc<Backend>>, Json(alert): Json<NewPriceAlert>) -> Response {
    match backend.create_price_alert(&alert) {
        Ok(alert) => created_response(alert),
        Err(e) => e.into_response(),
    }
}

pub async fn price_alerts_handler(State(backend): State<Arc<Backend>>, Path(email): Path<String>) -> Response {
    match backend.price_alerts(&email) {
        Ok(alerts) => json_response(PriceAlerts { email, alerts }),
        Err(e) => e.into_response(),
    }
}

pub async fn delete_price_alert_handler(
    State(backend): State<Arc<Backend>>,
    Path(id): Path<i64>,
    Query(params): Query<EmailQueryParams>,
) -> Response {
    match backend.delete_price_alert(id, &params.email) {
        Ok(deleted) => json_response(AlertDeletion::new(deleted)),
        Err(e) => e.into_response(),
    }
}
