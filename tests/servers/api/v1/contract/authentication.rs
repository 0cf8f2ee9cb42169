use tripcompare_test_helpers::configuration;

use crate::common::http::{Query, QueryParam};
use crate::common::logging;
use crate::servers::api::v1::asserts::{assert_token_not_valid, assert_unauthorized};
use crate::servers::api::v1::client::Client;
use crate::servers::api::Started;

#[tokio::test]
async fn should_authenticate_requests_by_using_a_token_query_param() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let token = env.get_connection_info().admin_token.unwrap();

    let response = Client::new(env.get_connection_info())
        .get_request_with_query("subscribers", Query::params([QueryParam::new("token", &token)].to_vec()))
        .await;

    assert_eq!(response.status(), 200);

    env.stop().await;
}

#[tokio::test]
async fn should_not_authenticate_requests_when_the_token_is_missing() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info())
        .get_request_with_query("subscribers", Query::default())
        .await;

    assert_unauthorized(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_not_authenticate_requests_when_the_token_is_empty() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info())
        .get_request_with_query("subscribers", Query::params([QueryParam::new("token", "")].to_vec()))
        .await;

    assert_token_not_valid(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_not_authenticate_requests_when_the_token_is_invalid() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info())
        .get_request_with_query("subscribers", Query::params([QueryParam::new("token", "INVALID TOKEN")].to_vec()))
        .await;

    assert_token_not_valid(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_allow_the_token_query_param_to_be_at_any_position_in_the_url_query() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let token = env.get_connection_info().admin_token.unwrap();

    // At the beginning of the query component
    let response = Client::new(env.get_connection_info())
        .get_request(&format!("subscribers?token={token}&limit=1"))
        .await;

    assert_eq!(response.status(), 200);

    // At the end of the query component
    let response = Client::new(env.get_connection_info())
        .get_request(&format!("subscribers?limit=1&token={token}"))
        .await;

    assert_eq!(response.status(), 200);

    env.stop().await;
}

#[tokio::test]
async fn should_not_require_a_token_for_public_routes() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info())
        .get_request_with_query("deals", Query::default())
        .await;

    assert_eq!(response.status(), 200);

    env.stop().await;
}

#[tokio::test]
async fn should_open_the_admin_routes_when_no_access_token_is_configured() {
    logging::init();

    let env = Started::new(&configuration::ephemeral_without_access_tokens().into()).await;

    assert!(env.get_connection_info().admin_token.is_none());

    let response = Client::new(env.get_connection_info())
        .get_request_with_query("subscribers", Query::default())
        .await;

    assert_eq!(response.status(), 200);

    env.stop().await;
}
