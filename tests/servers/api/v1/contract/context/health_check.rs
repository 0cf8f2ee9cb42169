use tripcompare::servers::apis::v1::context::health_check::resources::{DatabaseStatus, Report, ServiceInfo, Status};
use tripcompare_test_helpers::configuration;

use crate::common::logging;
use crate::servers::api::v1::client::get;
use crate::servers::api::{force_database_error, Started};

#[tokio::test]
async fn health_check_endpoint_should_return_status_ok_if_api_is_running() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let url = format!("http://{}/api/health_check", env.get_connection_info().bind_address);

    let response = get(&url, None).await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");
    assert_eq!(
        response.json::<Report>().await.unwrap(),
        Report {
            status: Status::Ok,
            database: DatabaseStatus::Connected,
            version: env.config.app.version.clone(),
        }
    );

    env.stop().await;
}

#[tokio::test]
async fn health_check_endpoint_should_report_an_unreachable_database() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    force_database_error(&env.backend);

    let url = format!("http://{}/api/health_check", env.get_connection_info().bind_address);

    let response = get(&url, None).await;

    assert_eq!(response.status(), 503);

    let report = response.json::<Report>().await.unwrap();

    assert_eq!(report.status, Status::Error);
    assert_eq!(report.database, DatabaseStatus::Unreachable);

    env.stop().await;
}

#[tokio::test]
async fn the_root_endpoint_should_describe_the_service() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = get(&format!("http://{}/", env.bind_address()), None).await;

    assert_eq!(response.status(), 200);

    let info = response.json::<ServiceInfo>().await.unwrap();

    assert_eq!(info.status, "healthy");
    assert_eq!(info.endpoints["deals"], "/api/v1/deals");
    assert_eq!(info.endpoints["search"], "/api/v1/search");

    env.stop().await;
}

#[tokio::test]
async fn every_response_should_carry_a_request_id() {
    logging::init();

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = get(&format!("http://{}/api/health_check", env.bind_address()), None).await;

    assert!(response.headers().get("x-request-id").is_some());

    env.stop().await;
}
