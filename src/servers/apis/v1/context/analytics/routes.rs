//! API routes for the [`analytics`](crate::servers::apis::v1::context::analytics) API context.
//!
//! Refer to the [API endpoint documentation](crate::servers::apis::v1::context::analytics).
use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::Router;

use super::handlers::{
    click_analytics_handler, create_price_alert_handler, dashboard_handler, delete_price_alert_handler,
    destination_analytics_handler, price_alerts_handler, revenue_estimate_handler, subscriber_analytics_handler,
};
use crate::core::Backend;
use crate::servers::apis::v1::middlewares::auth::protect;

/// It adds the routes to the router for the [`analytics`](crate::servers::apis::v1::context::analytics) API context.
pub fn add(prefix: &str, router: Router, backend: Arc<Backend>) -> Router {
    let prefix = format!("{prefix}/analytics");

    let admin = Router::new()
        .route(&format!("{prefix}/dashboard"), get(dashboard_handler).with_state(backend.clone()))
        .route(&format!("{prefix}/clicks"), get(click_analytics_handler).with_state(backend.clone()))
        .route(
            &format!("{prefix}/subscribers"),
            get(subscriber_analytics_handler).with_state(backend.clone()),
        )
        .route(
            &format!("{prefix}/destinations"),
            get(destination_analytics_handler).with_state(backend.clone()),
        )
        .route(&format!("{prefix}/revenue-estimate"), get(revenue_estimate_handler));

    router
        .route(
            &format!("{prefix}/price-alerts"),
            post(create_price_alert_handler).with_state(backend.clone()),
        )
        // The segment is the e-mail for `GET` and the alert id for `DELETE`.
        .route(
            &format!("{prefix}/price-alerts/:email"),
            get(price_alerts_handler).with_state(backend.clone()),
        )
        .route(
            &format!("{prefix}/price-alerts/:email"),
            delete(delete_price_alert_handler).with_state(backend.clone()),
        )
        .merge(protect(admin, &backend))
}
