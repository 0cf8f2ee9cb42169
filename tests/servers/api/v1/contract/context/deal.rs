use serde_json::json;
use tripcompare::core::deal::Deal;
use tripcompare::servers::apis::v1::context::deal::resources::Redirect;
use tripcompare_primitives::deal_type::DealType;
use tripcompare_test_helpers::configuration;

use crate::common::fixtures::new_deal;
use crate::common::http::{Query, QueryParam};
use crate::common::logging;
use crate::servers::api::connection_info::visitor;
use crate::servers::api::v1::asserts::{
    assert_bad_request_containing, assert_created, assert_json, assert_not_found, assert_ok, assert_unauthorized,
};
use crate::servers::api::v1::client::Client;
use crate::servers::api::Started;

#[tokio::test]
async fn should_allow_creating_a_deal_with_its_discount() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info())
        .create_deal(&new_deal("London to Barcelona", "flight", 200.0, 89.0))
        .await;

    let deal: Deal = assert_created(response).await;

    assert_eq!(deal.deal_type, DealType::Flight);
    assert_eq!(deal.discount_percentage, 55);
    assert_eq!(deal.currency, "EUR");
    assert_eq!(deal.click_count, 0);
    assert!(deal.is_active);

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_creating_a_deal_with_a_negative_price() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info())
        .create_deal(&new_deal("London to Barcelona", "flight", 200.0, -1.0))
        .await;

    assert_bad_request_containing(response, "deal_price").await;

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_creating_a_deal_for_an_unknown_destination() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let mut deal = new_deal("London to Barcelona", "flight", 200.0, 89.0);
    deal["destination_id"] = json!(999_999);

    let response = Client::new(env.get_connection_info()).create_deal(&deal).await;

    assert_not_found(response, "Destination not found").await;

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_creating_deals_for_unauthenticated_users() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(visitor(env.bind_address()))
        .create_deal(&new_deal("London to Barcelona", "flight", 200.0, 89.0))
        .await;

    assert_unauthorized(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_allow_filtering_the_deals_by_type() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    client.create_deal(&new_deal("London to Barcelona", "flight", 200.0, 89.0)).await;
    client.create_deal(&new_deal("Hotel Arts", "hotel", 300.0, 210.0)).await;
    client.create_deal(&new_deal("Rome weekend", "package", 500.0, 390.0)).await;

    let deals: Vec<Deal> = assert_json(
        client
            .get("deals", Query::params([QueryParam::new("deal_type", "hotel")].to_vec()))
            .await,
    )
    .await;

    assert_eq!(deals.len(), 1);
    assert_eq!(deals[0].title, "Hotel Arts");

    let flights: Vec<Deal> = assert_json(client.get("deals/flights", Query::default()).await).await;
    let hotels: Vec<Deal> = assert_json(client.get("deals/hotels", Query::default()).await).await;
    let packages: Vec<Deal> = assert_json(client.get("deals/packages", Query::default()).await).await;

    assert_eq!(flights[0].title, "London to Barcelona");
    assert_eq!(hotels[0].title, "Hotel Arts");
    assert_eq!(packages[0].title, "Rome weekend");

    env.stop().await;
}

#[tokio::test]
async fn should_reject_unknown_deal_types() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info())
        .get("deals", Query::params([QueryParam::new("deal_type", "cruise")].to_vec()))
        .await;

    assert_bad_request_containing(response, "Invalid query").await;

    env.stop().await;
}

#[tokio::test]
async fn hot_deals_should_be_sorted_by_discount() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    client.create_deal(&new_deal("Small discount", "flight", 100.0, 90.0)).await;
    client.create_deal(&new_deal("Big discount", "flight", 100.0, 30.0)).await;
    client.create_deal(&new_deal("Medium discount", "hotel", 100.0, 60.0)).await;

    let deals: Vec<Deal> = assert_json(client.get("deals/hot", Query::with("limit", "2")).await).await;

    let titles: Vec<&str> = deals.iter().map(|deal| deal.title.as_str()).collect();

    assert_eq!(titles, vec!["Big discount", "Medium discount"]);

    env.stop().await;
}

#[tokio::test]
async fn featured_deals_should_only_include_featured_ones() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    let mut featured = new_deal("Featured", "flight", 100.0, 50.0);
    featured["is_featured"] = json!(true);

    client.create_deal(&featured).await;
    client.create_deal(&new_deal("Regular", "flight", 100.0, 50.0)).await;

    let deals: Vec<Deal> = assert_json(client.get("deals/featured", Query::default()).await).await;

    assert_eq!(deals.len(), 1);
    assert_eq!(deals[0].title, "Featured");

    env.stop().await;
}

#[tokio::test]
async fn inactive_deals_should_not_be_listed() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    let deal: Deal = assert_created(client.create_deal(&new_deal("Expired", "flight", 100.0, 50.0)).await).await;

    let updated: Deal = assert_json(
        client
            .patch_json(&format!("deals/{}", deal.id), &json!({ "is_active": false }))
            .await,
    )
    .await;

    assert!(!updated.is_active);

    let deals: Vec<Deal> = assert_json(client.get("deals", Query::default()).await).await;

    assert!(deals.is_empty());

    env.stop().await;
}

#[tokio::test]
async fn updating_the_deal_price_should_recompute_the_discount() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    let deal: Deal = assert_created(client.create_deal(&new_deal("London to Barcelona", "flight", 200.0, 150.0)).await).await;

    assert_eq!(deal.discount_percentage, 25);

    let updated: Deal = assert_json(
        client
            .patch_json(&format!("deals/{}", deal.id), &json!({ "deal_price": 100.0 }))
            .await,
    )
    .await;

    assert_eq!(updated.discount_percentage, 50);

    env.stop().await;
}

#[tokio::test]
async fn should_count_the_clicks_of_a_deal() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    let deal: Deal = assert_created(client.create_deal(&new_deal("London to Barcelona", "flight", 200.0, 89.0)).await).await;

    assert_ok(client.post_empty(&format!("deals/{}/click", deal.id)).await, "Click tracked").await;
    assert_ok(client.post_empty(&format!("deals/{}/click", deal.id)).await, "Click tracked").await;

    let deal: Deal = assert_json(client.get(&format!("deals/{}", deal.id), Query::default()).await).await;

    assert_eq!(deal.click_count, 2);

    env.stop().await;
}

#[tokio::test]
async fn the_redirect_should_track_the_click_and_return_the_affiliate_link() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    let deal: Deal = assert_created(client.create_deal(&new_deal("London to Barcelona", "flight", 200.0, 89.0)).await).await;

    let redirect: Redirect = assert_json(client.get(&format!("deals/{}/redirect", deal.id), Query::default()).await).await;

    assert_eq!(
        redirect.affiliate_link,
        "https://www.aviasales.com/search/LON1504BCN22041?marker=tripcompare-test"
    );

    let deal: Deal = assert_json(client.get(&format!("deals/{}", deal.id), Query::default()).await).await;

    assert_eq!(deal.click_count, 1);

    env.stop().await;
}

#[tokio::test]
async fn the_redirect_should_fall_back_to_a_placeholder_without_an_affiliate_link() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    let mut deal = new_deal("No link", "hotel", 100.0, 80.0);
    deal["affiliate_link"] = json!(null);

    let deal: Deal = assert_created(client.create_deal(&deal).await).await;

    let redirect: Redirect = assert_json(client.get(&format!("deals/{}/redirect", deal.id), Query::default()).await).await;

    assert_eq!(redirect.affiliate_link, "#");

    env.stop().await;
}

#[tokio::test]
async fn should_fail_clicking_a_deal_that_does_not_exist() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info()).post_empty("deals/999999/click").await;

    assert_not_found(response, "Deal not found").await;

    env.stop().await;
}
