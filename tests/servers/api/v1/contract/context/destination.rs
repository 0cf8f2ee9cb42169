use serde_json::json;
use tripcompare::core::deal::Deal;
use tripcompare::core::destination::Destination;
use tripcompare_test_helpers::configuration;

use crate::common::fixtures::{new_deal, new_destination};
use crate::common::http::{Query, QueryParam};
use crate::common::logging;
use crate::servers::api::connection_info::{admin_with_invalid_token, visitor};
use crate::servers::api::v1::asserts::{
    assert_bad_request_containing, assert_created, assert_json, assert_not_found, assert_status, assert_token_not_valid,
    assert_unauthorized,
};
use crate::servers::api::v1::client::Client;
use crate::servers::api::Started;

#[tokio::test]
async fn should_allow_creating_a_destination() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info())
        .create_destination(&new_destination("Barcelona"))
        .await;

    let destination: Destination = assert_created(response).await;

    assert_eq!(destination.name, "Barcelona");
    assert_eq!(destination.city_code.as_deref(), Some("BCN"));
    assert_eq!(destination.tags, vec!["beach".to_owned(), "culture".to_owned()]);
    assert!(destination.is_featured);

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_creating_a_destination_without_a_name() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info())
        .create_destination(&json!({ "name": "", "country": "Spain" }))
        .await;

    assert_bad_request_containing(response, "name").await;

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_creating_destinations_for_unauthenticated_users() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(admin_with_invalid_token(env.bind_address()))
        .create_destination(&new_destination("Barcelona"))
        .await;

    assert_token_not_valid(response).await;

    let response = Client::new(visitor(env.bind_address()))
        .create_destination(&new_destination("Barcelona"))
        .await;

    assert_unauthorized(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_allow_listing_the_featured_destinations_only() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    client.create_destination(&new_destination("Barcelona")).await;
    client
        .create_destination(&json!({ "name": "Porto", "country": "Portugal", "is_featured": false }))
        .await;

    let all: Vec<Destination> = assert_json(client.get("destinations", Query::default()).await).await;

    assert_eq!(all.len(), 2);

    let featured: Vec<Destination> = assert_json(
        client
            .get("destinations", Query::params([QueryParam::new("featured_only", "true")].to_vec()))
            .await,
    )
    .await;

    assert_eq!(featured.len(), 1);
    assert_eq!(featured[0].name, "Barcelona");

    let featured: Vec<Destination> = assert_json(client.get("destinations/featured", Query::default()).await).await;

    assert_eq!(featured.len(), 1);

    env.stop().await;
}

#[tokio::test]
async fn should_allow_searching_destinations_by_name_country_or_city_code() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    client.create_destination(&new_destination("Barcelona")).await;
    client
        .create_destination(&json!({ "name": "Lisbon", "country": "Portugal", "city_code": "LIS" }))
        .await;

    let found: Vec<Destination> = assert_json(client.get("destinations/search", Query::with("q", "barc")).await).await;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Barcelona");

    let found: Vec<Destination> = assert_json(client.get("destinations/search", Query::with("q", "portu")).await).await;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Lisbon");

    let found: Vec<Destination> = assert_json(client.get("destinations/search", Query::with("q", "lis")).await).await;

    assert_eq!(found.len(), 1);

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_searching_destinations_with_a_one_character_query() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info())
        .get("destinations/search", Query::with("q", "b"))
        .await;

    assert_bad_request_containing(response, "q").await;

    env.stop().await;
}

#[tokio::test]
async fn should_allow_getting_and_updating_a_destination() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    let created: Destination = assert_created(client.create_destination(&new_destination("Barcelona")).await).await;

    let fetched: Destination = assert_json(client.get(&format!("destinations/{}", created.id), Query::default()).await).await;

    assert_eq!(fetched, created);

    let updated: Destination = assert_json(
        client
            .patch_json(
                &format!("destinations/{}", created.id),
                &json!({ "avg_flight_price": 59.0, "is_featured": false }),
            )
            .await,
    )
    .await;

    assert_eq!(updated.avg_flight_price, Some(59.0));
    assert!(!updated.is_featured);
    assert_eq!(updated.name, "Barcelona");
    assert!(updated.updated_at.is_some());

    env.stop().await;
}

#[tokio::test]
async fn should_fail_getting_a_destination_that_does_not_exist() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info())
        .get("destinations/999999", Query::default())
        .await;

    assert_not_found(response, "Destination not found").await;

    env.stop().await;
}

#[tokio::test]
async fn should_reject_non_numeric_destination_ids() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info())
        .get("destinations/barcelona", Query::default())
        .await;

    assert_status(response, 400).await;

    env.stop().await;
}

#[tokio::test]
async fn should_list_the_active_deals_of_a_destination() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    let barcelona: Destination = assert_created(client.create_destination(&new_destination("Barcelona")).await).await;

    let mut deal = new_deal("London to Barcelona", "flight", 200.0, 89.0);
    deal["destination_id"] = json!(barcelona.id);
    client.create_deal(&deal).await;

    client.create_deal(&new_deal("London to Rome", "flight", 180.0, 99.0)).await;

    let deals: Vec<Deal> = assert_json(client.get(&format!("destinations/{}/deals", barcelona.id), Query::default()).await).await;

    assert_eq!(deals.len(), 1);
    assert_eq!(deals[0].title, "London to Barcelona");

    let response = client.get("destinations/999999/deals", Query::default()).await;

    assert_not_found(response, "Destination not found").await;

    env.stop().await;
}
