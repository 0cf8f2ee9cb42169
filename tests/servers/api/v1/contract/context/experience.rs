use serde_json::json;
use tripcompare::core::destination::Destination;
use tripcompare::core::experience::Experience;
use tripcompare_test_helpers::configuration;

use crate::common::fixtures::{new_destination, new_experience};
use crate::common::http::{Query, QueryParam};
use crate::common::logging;
use crate::servers::api::connection_info::admin_with_invalid_token;
use crate::servers::api::v1::asserts::{
    assert_bad_request_containing, assert_created, assert_json, assert_not_found, assert_ok, assert_token_not_valid,
};
use crate::servers::api::v1::client::Client;
use crate::servers::api::Started;

#[tokio::test]
async fn should_allow_creating_an_experience() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info())
        .create_experience(&new_experience("Sagrada Familia tour", 39.0, Some(4.8)))
        .await;

    let experience: Experience = assert_created(response).await;

    assert_eq!(experience.title, "Sagrada Familia tour");
    assert_eq!(experience.currency, "EUR");
    assert_eq!(experience.affiliate_provider, "getyourguide");
    assert_eq!(experience.review_count, 120);

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_ratings_above_five() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info())
        .create_experience(&new_experience("Sagrada Familia tour", 39.0, Some(5.5)))
        .await;

    assert_bad_request_containing(response, "rating").await;

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_creating_experiences_for_unauthenticated_users() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(admin_with_invalid_token(env.bind_address()))
        .create_experience(&new_experience("Sagrada Familia tour", 39.0, Some(4.8)))
        .await;

    assert_token_not_valid(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_allow_filtering_experiences_by_destination_and_category() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    let barcelona: Destination = assert_created(client.create_destination(&new_destination("Barcelona")).await).await;

    let mut tapas = new_experience("Tapas crawl", 65.0, Some(4.9));
    tapas["destination_id"] = json!(barcelona.id);
    tapas["category"] = json!("food");

    client.create_experience(&tapas).await;
    client.create_experience(&new_experience("Colosseum tour", 45.0, Some(4.7))).await;

    let experiences: Vec<Experience> = assert_json(
        client
            .get(
                "experiences",
                Query::params([QueryParam::new("destination_id", &barcelona.id.to_string())].to_vec()),
            )
            .await,
    )
    .await;

    assert_eq!(experiences.len(), 1);
    assert_eq!(experiences[0].title, "Tapas crawl");

    let experiences: Vec<Experience> = assert_json(client.get("experiences", Query::with("category", "tours")).await).await;

    assert_eq!(experiences.len(), 1);
    assert_eq!(experiences[0].title, "Colosseum tour");

    env.stop().await;
}

#[tokio::test]
async fn top_rated_experiences_should_be_sorted_by_rating_with_unrated_ones_last() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    client.create_experience(&new_experience("Unrated", 10.0, None)).await;
    client.create_experience(&new_experience("Good", 10.0, Some(4.2))).await;
    client.create_experience(&new_experience("Best", 10.0, Some(4.9))).await;

    let experiences: Vec<Experience> = assert_json(client.get("experiences/top-rated", Query::default()).await).await;

    let titles: Vec<&str> = experiences.iter().map(|experience| experience.title.as_str()).collect();

    assert_eq!(titles, vec!["Best", "Good", "Unrated"]);

    env.stop().await;
}

#[tokio::test]
async fn should_list_the_experience_categories() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let categories: Vec<String> = assert_json(
        Client::new(env.get_connection_info())
            .get("experiences/categories", Query::default())
            .await,
    )
    .await;

    assert_eq!(
        categories,
        vec!["tours", "food", "adventure", "culture", "nightlife", "nature", "sports", "wellness"]
    );

    env.stop().await;
}

#[tokio::test]
async fn should_track_clicks_on_an_experience() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    let experience: Experience =
        assert_created(client.create_experience(&new_experience("Sagrada Familia tour", 39.0, Some(4.8))).await).await;

    assert_ok(client.post_empty(&format!("experiences/{}/click", experience.id)).await, "Click tracked").await;

    assert_eq!(env.backend.count_clicks(1).unwrap(), 1);

    env.stop().await;
}

#[tokio::test]
async fn should_fail_getting_an_experience_that_does_not_exist() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info())
        .get("experiences/999999", Query::default())
        .await;

    assert_not_found(response, "Experience not found").await;

    env.stop().await;
}
