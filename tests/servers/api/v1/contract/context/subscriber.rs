use serde_json::json;
use tripcompare::core::subscriber::Subscriber;
use tripcompare::servers::apis::v1::context::subscriber::resources::SubscriberCount;
use tripcompare_test_helpers::{configuration, random};

use crate::common::http::{Query, QueryParam};
use crate::common::logging;
use crate::servers::api::connection_info::{admin_with_invalid_token, visitor};
use crate::servers::api::v1::asserts::{
    assert_bad_request, assert_bad_request_containing, assert_created, assert_internal_server_error, assert_json, assert_not_found,
    assert_ok, assert_token_not_valid, assert_unauthorized, assert_unprocessable_content,
};
use crate::servers::api::v1::client::Client;
use crate::servers::api::{force_database_error, Started};

#[tokio::test]
async fn should_allow_subscribing_to_the_newsletter() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let email = random::email();

    let response = Client::new(env.get_connection_info())
        .subscribe(&json!({ "email": email, "name": "Jane", "source": "footer" }))
        .await;

    let subscriber: Subscriber = assert_created(response).await;

    assert_eq!(subscriber.email, email);
    assert_eq!(subscriber.name.as_deref(), Some("Jane"));
    assert_eq!(subscriber.source, "footer");
    assert!(subscriber.is_active);

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_subscribing_twice_with_the_same_email() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let email = random::email();
    let client = Client::new(env.get_connection_info());

    client.subscribe(&json!({ "email": email })).await;

    let response = client.subscribe(&json!({ "email": email })).await;

    assert_bad_request(response, "Email already subscribed").await;

    env.stop().await;
}

#[tokio::test]
async fn should_reactivate_a_cancelled_subscription() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let email = random::email();
    let client = Client::new(env.get_connection_info());

    let created: Subscriber = assert_created(client.subscribe(&json!({ "email": email })).await).await;

    assert_ok(client.unsubscribe(&email).await, "Successfully unsubscribed").await;

    let reactivated: Subscriber = assert_created(client.subscribe(&json!({ "email": email })).await).await;

    assert_eq!(reactivated.id, created.id);
    assert!(reactivated.is_active);

    env.stop().await;
}

#[tokio::test]
async fn should_reject_malformed_emails() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info())
        .subscribe(&json!({ "email": "not-an-email" }))
        .await;

    assert_bad_request_containing(response, "email").await;

    env.stop().await;
}

#[tokio::test]
async fn should_reject_bodies_without_an_email() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info())
        .subscribe(&json!({ "name": "Jane" }))
        .await;

    assert_unprocessable_content(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_allow_getting_a_subscriber() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let email = random::email();
    let client = Client::new(env.get_connection_info());

    client.subscribe(&json!({ "email": email })).await;

    let subscriber: Subscriber = assert_json(client.get_subscriber(&email).await).await;

    assert_eq!(subscriber.email, email);
    assert_eq!(subscriber.source, "website");

    env.stop().await;
}

#[tokio::test]
async fn should_fail_getting_a_subscriber_that_does_not_exist() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info())
        .get_subscriber(&random::email())
        .await;

    assert_not_found(response, "Subscriber not found").await;

    env.stop().await;
}

#[tokio::test]
async fn should_allow_updating_the_subscriber_preferences() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let email = random::email();
    let client = Client::new(env.get_connection_info());

    client.subscribe(&json!({ "email": email })).await;

    let response = client
        .patch_json(
            &format!("subscribers/{email}"),
            &json!({ "name": "Jane Doe", "preferences": { "flights": false, "hotels": true, "experiences": true, "frequency": "daily" } }),
        )
        .await;

    let subscriber: Subscriber = assert_json(response).await;

    assert_eq!(subscriber.name.as_deref(), Some("Jane Doe"));
    assert!(subscriber.updated_at.is_some());

    env.stop().await;
}

#[tokio::test]
async fn should_soft_delete_unsubscribed_emails() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let email = random::email();
    let client = Client::new(env.get_connection_info());

    client.subscribe(&json!({ "email": email })).await;

    assert_ok(client.unsubscribe(&email).await, "Successfully unsubscribed").await;

    let subscriber: Subscriber = assert_json(client.get_subscriber(&email).await).await;

    assert!(!subscriber.is_active);

    env.stop().await;
}

#[tokio::test]
async fn should_fail_unsubscribing_an_unknown_email() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info())
        .unsubscribe(&random::email())
        .await;

    assert_not_found(response, "Subscriber not found").await;

    env.stop().await;
}

#[tokio::test]
async fn should_allow_listing_the_active_subscribers() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    let active = random::email();
    let inactive = random::email();

    client.subscribe(&json!({ "email": active })).await;
    client.subscribe(&json!({ "email": inactive })).await;
    client.unsubscribe(&inactive).await;

    let subscribers: Vec<Subscriber> = assert_json(client.get("subscribers", Query::default()).await).await;

    assert_eq!(subscribers.len(), 1);
    assert_eq!(subscribers[0].email, active);

    let subscribers: Vec<Subscriber> = assert_json(
        client
            .get("subscribers", Query::params([QueryParam::new("active_only", "false")].to_vec()))
            .await,
    )
    .await;

    assert_eq!(subscribers.len(), 2);

    env.stop().await;
}

#[tokio::test]
async fn should_allow_counting_the_subscribers() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    client.subscribe(&json!({ "email": random::email() })).await;
    client.subscribe(&json!({ "email": random::email() })).await;

    let count: SubscriberCount = assert_json(client.get("subscribers/count/total", Query::default()).await).await;

    assert_eq!(
        count,
        SubscriberCount {
            total: 2,
            active_only: true
        }
    );

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_listing_subscribers_for_unauthenticated_users() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(admin_with_invalid_token(env.bind_address()))
        .get("subscribers", Query::default())
        .await;

    assert_token_not_valid(response).await;

    let response = Client::new(visitor(env.bind_address()))
        .get("subscribers/count/total", Query::default())
        .await;

    assert_unauthorized(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_fail_when_the_database_is_unreachable() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    force_database_error(&env.backend);

    let response = Client::new(env.get_connection_info())
        .subscribe(&json!({ "email": random::email() }))
        .await;

    assert_internal_server_error(response).await;

    env.stop().await;
}
