use tripcompare::core::deal::Deal;
use tripcompare::servers::apis::v1::context::seed::resources::Seeded;
use tripcompare_test_helpers::configuration;

use crate::common::http::Query;
use crate::common::logging;
use crate::servers::api::connection_info::visitor;
use crate::servers::api::v1::asserts::{assert_forbidden, assert_json, assert_unauthorized};
use crate::servers::api::v1::client::Client;
use crate::servers::api::Started;

#[tokio::test]
async fn should_seed_the_sample_catalog_in_debug_mode() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    let seeded: Seeded = assert_json(client.seed().await).await;

    assert_eq!(
        seeded,
        Seeded {
            message: "Database seeded successfully".to_owned(),
            destinations: 4,
            deals: 4,
            experiences: 4,
        }
    );

    let featured: Vec<Deal> = assert_json(client.get("deals/featured", Query::default()).await).await;

    assert_eq!(featured.len(), 4);

    env.stop().await;
}

#[tokio::test]
async fn seeding_twice_should_not_duplicate_the_sample_catalog() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    client.seed().await;

    let seeded: Seeded = assert_json(client.seed().await).await;

    assert_eq!((seeded.destinations, seeded.deals, seeded.experiences), (0, 0, 0));

    env.stop().await;
}

#[tokio::test]
async fn seeding_should_be_forbidden_outside_debug_mode() {
    logging::init();

    let env = Started::new(&configuration::ephemeral_production().into()).await;

    let response = Client::new(env.get_connection_info()).seed().await;

    assert_forbidden(response, "Seeding only available in DEBUG mode").await;

    env.stop().await;
}

#[tokio::test]
async fn seeding_should_require_a_token() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(visitor(env.bind_address()))
        .seed()
        .await;

    assert_unauthorized(response).await;

    env.stop().await;
}
