use serde_json::json;
use tripcompare::core::deal::Deal;
use tripcompare::core::price_alert::PriceAlert;
use tripcompare::core::services::analytics::{ClickAnalytics, Dashboard, DestinationAnalytics, RevenueEstimate, SubscriberAnalytics};
use tripcompare::core::tracking::DestinationSearches;
use tripcompare::servers::apis::v1::context::analytics::resources::{AlertDeletion, PriceAlerts};
use tripcompare_test_helpers::{configuration, random};

use crate::common::fixtures::{new_deal, new_destination};
use crate::common::http::{Query, QueryParam};
use crate::common::logging;
use crate::servers::api::connection_info::visitor;
use crate::servers::api::v1::asserts::{
    assert_bad_request_containing, assert_created, assert_internal_server_error, assert_json, assert_unauthorized,
};
use crate::servers::api::v1::client::Client;
use crate::servers::api::{force_database_error, Started};

fn hotel_search(destination: &str) -> serde_json::Value {
    json!({ "destination": destination, "check_in": "2026-05-01", "check_out": "2026-05-04" })
}

#[tokio::test]
async fn the_dashboard_should_aggregate_subscribers_clicks_deals_and_searches() {
    logging::init();

    let env = Started::new(&configuration::ephemeral_with_partners().into()).await;

    let client = Client::new(env.get_connection_info());

    client.subscribe(&json!({ "email": random::email() })).await;
    client.create_destination(&new_destination("Barcelona")).await;

    let deal: Deal = assert_created(client.create_deal(&new_deal("London to Barcelona", "flight", 200.0, 89.0)).await).await;
    client.post_empty(&format!("deals/{}/click", deal.id)).await;

    client.post_json("search/hotels", &hotel_search("Barcelona")).await;
    client.post_json("search/hotels", &hotel_search("Barcelona")).await;

    let dashboard: Dashboard = assert_json(client.get("analytics/dashboard", Query::default()).await).await;

    assert_eq!(dashboard.total_subscribers, 1);
    assert_eq!(dashboard.total_clicks, 1);
    assert_eq!(dashboard.total_deals, 1);
    assert_eq!(dashboard.recent_signups, 1);
    assert_eq!(dashboard.clicks_by_provider.get("aviasales"), Some(&1));
    assert_eq!(
        dashboard.top_destinations,
        vec![DestinationSearches {
            name: "Barcelona".to_owned(),
            searches: 2
        }]
    );

    env.stop().await;
}

#[tokio::test]
async fn the_click_analytics_should_average_the_clicks_over_the_period() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    let deal: Deal = assert_created(client.create_deal(&new_deal("London to Barcelona", "flight", 200.0, 89.0)).await).await;

    for _ in 0..3 {
        client.post_empty(&format!("deals/{}/click", deal.id)).await;
    }

    let clicks: ClickAnalytics = assert_json(client.get("analytics/clicks", Query::with("days", "2")).await).await;

    assert_eq!(clicks.period_days, 2);
    assert_eq!(clicks.total_clicks, 3);
    assert!((clicks.avg_daily_clicks - 1.5).abs() < f64::EPSILON);

    env.stop().await;
}

#[tokio::test]
async fn the_click_analytics_should_reject_periods_longer_than_a_year() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info())
        .get("analytics/clicks", Query::with("days", "366"))
        .await;

    assert_bad_request_containing(response, "days").await;

    env.stop().await;
}

#[tokio::test]
async fn the_subscriber_analytics_should_compute_the_churn_rate() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    let leaving = random::email();

    for email in [random::email(), random::email(), random::email(), leaving.clone()] {
        client.subscribe(&json!({ "email": email })).await;
    }
    client.unsubscribe(&leaving).await;

    let subscribers: SubscriberAnalytics = assert_json(client.get("analytics/subscribers", Query::default()).await).await;

    assert_eq!(subscribers.total_subscribers, 4);
    assert_eq!(subscribers.active_subscribers, 3);
    assert_eq!(subscribers.inactive_subscribers, 1);
    assert_eq!(subscribers.signups_last_7_days, 4);
    assert!((subscribers.churn_rate - 25.0).abs() < f64::EPSILON);

    env.stop().await;
}

#[tokio::test]
async fn the_destination_analytics_should_rank_destinations_by_searches() {
    logging::init();

    let env = Started::new(&configuration::ephemeral_with_partners().into()).await;

    let client = Client::new(env.get_connection_info());

    client.create_destination(&new_destination("Barcelona")).await;
    client.create_destination(&new_destination("Lisbon")).await;

    client.post_json("search/hotels", &hotel_search("Lisbon")).await;

    let analytics: DestinationAnalytics = assert_json(client.get("analytics/destinations", Query::default()).await).await;

    assert_eq!(
        analytics.top_destinations,
        vec![
            DestinationSearches {
                name: "Lisbon".to_owned(),
                searches: 1
            },
            DestinationSearches {
                name: "Barcelona".to_owned(),
                searches: 0
            },
        ]
    );

    env.stop().await;
}

#[tokio::test]
async fn the_revenue_estimate_should_use_the_default_rates() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let estimate: RevenueEstimate = assert_json(
        Client::new(env.get_connection_info())
            .get("analytics/revenue-estimate", Query::with("clicks", "1000"))
            .await,
    )
    .await;

    assert_eq!(estimate.clicks, 1000);
    assert_eq!(estimate.conversion_rate, "2.00%");
    assert_eq!(estimate.gross_booking_value, "€3000.00");
    assert_eq!(estimate.commission_rate, "5.00%");
    assert_eq!(estimate.estimated_monthly_revenue, "€150.00");

    env.stop().await;
}

#[tokio::test]
async fn the_revenue_estimate_should_reject_rates_above_one() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info())
        .get(
            "analytics/revenue-estimate",
            Query::params([QueryParam::new("clicks", "10"), QueryParam::new("commission_rate", "1.5")].to_vec()),
        )
        .await;

    assert_bad_request_containing(response, "commission_rate").await;

    env.stop().await;
}

#[tokio::test]
async fn the_admin_analytics_should_require_a_token() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(visitor(env.bind_address()));

    for path in [
        "analytics/dashboard",
        "analytics/clicks",
        "analytics/subscribers",
        "analytics/destinations",
        "analytics/revenue-estimate",
    ] {
        assert_unauthorized(client.get(path, Query::default()).await).await;
    }

    env.stop().await;
}

#[tokio::test]
async fn the_dashboard_should_fail_when_the_database_is_unreachable() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    force_database_error(&env.backend);

    let response = Client::new(env.get_connection_info())
        .get("analytics/dashboard", Query::default())
        .await;

    assert_internal_server_error(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_allow_creating_listing_and_deleting_price_alerts() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(visitor(env.bind_address()));

    let email = random::email();

    let alert: PriceAlert = assert_created(
        client
            .post_json(
                "analytics/price-alerts",
                &json!({ "email": email, "alert_type": "flight", "origin": "LON", "destination": "BCN", "target_price": 60.0 }),
            )
            .await,
    )
    .await;

    assert!(alert.is_active);
    assert_eq!(alert.target_price, Some(60.0));

    let alerts: PriceAlerts = assert_json(client.get(&format!("analytics/price-alerts/{email}"), Query::default()).await).await;

    assert_eq!(alerts.email, email);
    assert_eq!(alerts.alerts, vec![alert.clone()]);

    let deletion: AlertDeletion = assert_json(
        client
            .delete(&format!("analytics/price-alerts/{}", alert.id), Query::with("email", &email))
            .await,
    )
    .await;

    assert_eq!(deletion, AlertDeletion::new(true));

    let alerts: PriceAlerts = assert_json(client.get(&format!("analytics/price-alerts/{email}"), Query::default()).await).await;

    assert!(alerts.alerts.is_empty());

    env.stop().await;
}

#[tokio::test]
async fn should_not_delete_a_price_alert_of_another_email() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    let alert: PriceAlert = assert_created(
        client
            .post_json(
                "analytics/price-alerts",
                &json!({ "email": random::email(), "alert_type": "hotel", "destination": "Lisbon" }),
            )
            .await,
    )
    .await;

    let deletion: AlertDeletion = assert_json(
        client
            .delete(
                &format!("analytics/price-alerts/{}", alert.id),
                Query::with("email", &random::email()),
            )
            .await,
    )
    .await;

    assert_eq!(
        deletion,
        AlertDeletion {
            success: false,
            message: "Alert not found".to_owned()
        }
    );

    env.stop().await;
}

#[tokio::test]
async fn should_reject_price_alerts_with_malformed_emails() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info())
        .post_json(
            "analytics/price-alerts",
            &json!({ "email": "nobody", "alert_type": "flight", "destination": "BCN" }),
        )
        .await;

    assert_bad_request_containing(response, "email").await;

    env.stop().await;
}
