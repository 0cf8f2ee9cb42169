//! API handlers for the [`health_check`](crate::servers::apis::v1::context::health_check)
//! API context.
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{Map, Value};

use super::resources::{DatabaseStatus, Report, ServiceInfo, Status};
use crate::core::Backend;

const CONTEXTS: [&str; 6] = ["subscribers", "destinations", "deals", "experiences", "search", "analytics"];

/// Endpoint for container health check.
pub async fn health_check_handler(State(backend): State<Arc<Backend>>) -> Response {
    let version = backend.config().app.version.clone();

    if backend.is_database_reachable() {
        Json(Report {
            status: Status::Ok,
            database: DatabaseStatus::Connected,
            version,
        })
        .into_response()
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(Report {
                status: Status::Error,
                database: DatabaseStatus::Unreachable,
                version,
            }),
        )
            .into_response()
    }
}

pub async fn service_info_handler(State(backend): State<Arc<Backend>>) -> Json<ServiceInfo> {
    let app = &backend.config().app;

    let endpoints: Map<String, Value> = CONTEXTS
        .iter()
        .map(|context| ((*context).to_owned(), Value::String(format!("/api/v1/{context}"))))
        .collect();

    Json(ServiceInfo {
        name: app.name.clone(),
        version: app.version.clone(),
        status: "healthy".to_owned(),
        endpoints,
    })
}
