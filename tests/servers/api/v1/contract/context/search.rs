use serde_json::{json, Value};
use tripcompare::core::services::search::SearchResult;
use tripcompare_configuration::Configuration;
use tripcompare_test_helpers::configuration::{self, TEST_MARKER, TEST_TOKEN};
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::http::{Query, QueryParam};
use crate::common::logging;
use crate::servers::api::v1::asserts::{assert_bad_request, assert_json, assert_status, assert_unprocessable_content};
use crate::servers::api::v1::client::Client;
use crate::servers::api::Started;

fn flight_search() -> Value {
    json!({
        "origin": "LON",
        "destination": "BCN",
        "departure_date": "2026-04-15",
        "return_date": "2026-04-22",
        "travelers": 1
    })
}

/// Partner credentials with both data APIs pointing to the mock server.
fn with_partner_api(partner_api: &MockServer) -> Configuration {
    let mut config = configuration::ephemeral_with_partners();

    let url = Url::parse(&partner_api.uri()).unwrap();

    config.travelpayouts.flight_api_url = url.clone();
    config.travelpayouts.hotel_api_url = url;

    config
}

mod affiliate_links {
    use super::*;

    #[tokio::test]
    async fn a_flight_search_should_return_the_aviasales_link() {
        logging::init();

        let env = Started::new(&configuration::ephemeral_with_partners().into()).await;

        let result: SearchResult = assert_json(
            Client::new(env.get_connection_info())
                .post_json("search/flights", &flight_search())
                .await,
        )
        .await;

        assert_eq!(
            result.search_url,
            "https://www.aviasales.com/search/LON1504BCN22041?marker=tripcompare-test"
        );
        assert_eq!(result.affiliate_provider, "aviasales");
        assert_eq!(result.parameters["cabin_class"], "economy");
        assert_eq!(result.parameters["marker"], TEST_MARKER);

        env.stop().await;
    }

    #[tokio::test]
    async fn a_flight_search_should_be_logged_for_the_analytics() {
        logging::init();

        let env = Started::new(&configuration::ephemeral_with_partners().into()).await;

        reqwest::Client::new()
            .post(format!("http://{}/api/v1/search/flights", env.bind_address()))
            .header("User-Agent", "integration-test")
            .header("Cookie", "session_id=abc123")
            .json(&flight_search())
            .send()
            .await
            .unwrap();

        env.backend
            .create_destination(&tripcompare::core::destination::NewDestination {
                name: "BCN".to_owned(),
                country: "Spain".to_owned(),
                ..Default::default()
            })
            .unwrap();

        let top = env.backend.top_destinations(1).unwrap();

        assert_eq!(top[0].searches, 1);

        env.stop().await;
    }

    #[tokio::test]
    async fn a_flight_search_should_fail_without_an_affiliate_marker() {
        logging::init();

        let env = Started::new(&configuration::ephemeral().into()).await;

        env.backend
            .create_destination(&tripcompare::core::destination::NewDestination {
                name: "BCN".to_owned(),
                country: "Spain".to_owned(),
                ..Default::default()
            })
            .unwrap();

        let response = Client::new(env.get_connection_info())
            .post_json("search/flights", &flight_search())
            .await;

        assert_status(response, 500).await;

        let top = env.backend.top_destinations(1).unwrap();

        assert_eq!(top[0].searches, 0);

        env.stop().await;
    }

    #[tokio::test]
    async fn a_flight_search_should_reject_more_than_nine_travelers() {
        logging::init();

        let env = Started::new(&configuration::ephemeral_with_partners().into()).await;

        let mut search = flight_search();
        search["travelers"] = json!(10);

        let response = Client::new(env.get_connection_info()).post_json("search/flights", &search).await;

        assert_eq!(response.status(), 400);

        env.stop().await;
    }

    #[tokio::test]
    async fn a_flight_search_should_reject_malformed_dates() {
        logging::init();

        let env = Started::new(&configuration::ephemeral_with_partners().into()).await;

        let mut search = flight_search();
        search["departure_date"] = json!("15/04/2026");

        let response = Client::new(env.get_connection_info()).post_json("search/flights", &search).await;

        assert_unprocessable_content(response).await;

        env.stop().await;
    }

    #[tokio::test]
    async fn a_hotel_search_should_return_the_hotellook_link() {
        logging::init();

        let env = Started::new(&configuration::ephemeral_with_partners().into()).await;

        let result: SearchResult = assert_json(
            Client::new(env.get_connection_info())
                .post_json(
                    "search/hotels",
                    &json!({ "destination": "Barcelona", "check_in": "2026-05-01", "check_out": "2026-05-04", "guests": 2 }),
                )
                .await,
        )
        .await;

        assert_eq!(
            result.search_url,
            "https://search.hotellook.com?destination=Barcelona&checkIn=2026-05-01&checkOut=2026-05-04&adults=2&marker=tripcompare-test"
        );
        assert_eq!(result.affiliate_provider, "hotellook");
        assert_eq!(result.parameters["rooms"], 1);

        env.stop().await;
    }

    #[tokio::test]
    async fn an_experience_search_should_return_the_getyourguide_link() {
        logging::init();

        let env = Started::new(&configuration::ephemeral_with_partners().into()).await;

        let result: SearchResult = assert_json(
            Client::new(env.get_connection_info())
                .get(
                    "search/experiences",
                    Query::params(
                        [
                            QueryParam::new("destination", "Barcelona"),
                            QueryParam::new("date", "2026-05-02"),
                        ]
                        .to_vec(),
                    ),
                )
                .await,
        )
        .await;

        assert_eq!(
            result.search_url,
            "https://www.getyourguide.com/s/?q=Barcelona&date_from=2026-05-02&partner_id=GYG-TEST"
        );
        assert_eq!(result.affiliate_provider, "getyourguide");

        env.stop().await;
    }

    #[tokio::test]
    async fn a_car_search_should_return_the_rentalcars_link() {
        logging::init();

        let env = Started::new(&configuration::ephemeral_with_partners().into()).await;

        let result: SearchResult = assert_json(
            Client::new(env.get_connection_info())
                .get(
                    "search/cars",
                    Query::params(
                        [
                            QueryParam::new("pickup_location", "Barcelona"),
                            QueryParam::new("pickup_date", "2026-04-15"),
                            QueryParam::new("dropoff_date", "2026-04-22"),
                        ]
                        .to_vec(),
                    ),
                )
                .await,
        )
        .await;

        assert!(result.search_url.starts_with("https://www.rentalcars.com/SearchResults.do?country=Barcelona"));
        assert!(result.search_url.contains("puHour=10&puMinute=00"));
        assert!(result.search_url.ends_with("affiliateCode=tripcompare-test"));
        assert_eq!(result.affiliate_provider, "rentalcars");

        env.stop().await;
    }

    #[tokio::test]
    async fn a_car_search_should_reject_malformed_times() {
        logging::init();

        let env = Started::new(&configuration::ephemeral_with_partners().into()).await;

        let response = Client::new(env.get_connection_info())
            .get(
                "search/cars",
                Query::params(
                    [
                        QueryParam::new("pickup_location", "Barcelona"),
                        QueryParam::new("pickup_date", "2026-04-15"),
                        QueryParam::new("dropoff_date", "2026-04-22"),
                        QueryParam::new("pickup_time", "25:00"),
                    ]
                    .to_vec(),
                ),
            )
            .await;

        assert_bad_request(response, "Invalid time `25:00`, expected HH:MM").await;

        env.stop().await;
    }

    #[tokio::test]
    async fn a_package_search_should_default_to_two_travelers() {
        logging::init();

        let env = Started::new(&configuration::ephemeral_with_partners().into()).await;

        let result: SearchResult = assert_json(
            Client::new(env.get_connection_info())
                .post_json(
                    "search/packages?origin=LON&destination=BCN&departure_date=2026-04-15&return_date=2026-04-22",
                    &json!({}),
                )
                .await,
        )
        .await;

        assert_eq!(result.affiliate_provider, "aviasales");
        assert_eq!(result.parameters["travelers"], 2);

        env.stop().await;
    }

    #[tokio::test]
    async fn the_widget_config_should_use_the_marker() {
        logging::init();

        let env = Started::new(&configuration::ephemeral_with_partners().into()).await;

        let config: Value = assert_json(
            Client::new(env.get_connection_info())
                .get("search/widget/config", Query::default())
                .await,
        )
        .await;

        assert_eq!(config["marker"], TEST_MARKER);
        assert_eq!(config["token_configured"], true);

        env.stop().await;
    }
}

mod partner_prices {
    use super::*;

    #[tokio::test]
    async fn cheapest_fares_should_get_booking_links() {
        logging::init();

        let partner_api = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/prices/cheap"))
            .and(query_param("origin", "LON"))
            .and(query_param("destination", "BCN"))
            .and(query_param("token", TEST_TOKEN))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": {
                    "BCN": {
                        "0": { "price": 45, "departure_at": "2026-04-15T06:00:00Z", "return_at": "2026-04-22T21:00:00Z" }
                    }
                }
            })))
            .expect(1)
            .mount(&partner_api)
            .await;

        let env = Started::new(&with_partner_api(&partner_api).into()).await;

        let prices: Value = assert_json(
            Client::new(env.get_connection_info())
                .get(
                    "search/flights/prices",
                    Query::params([QueryParam::new("origin", "lon"), QueryParam::new("destination", "bcn")].to_vec()),
                )
                .await,
        )
        .await;

        assert_eq!(
            prices["data"]["BCN"]["0"]["booking_link"],
            "https://www.aviasales.com/search/LON1504BCN22041?marker=tripcompare-test"
        );

        env.stop().await;
    }

    #[tokio::test]
    async fn direct_fares_should_use_the_non_stop_endpoint() {
        logging::init();

        let partner_api = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/prices/direct"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": {} })))
            .expect(1)
            .mount(&partner_api)
            .await;

        let env = Started::new(&with_partner_api(&partner_api).into()).await;

        let response = Client::new(env.get_connection_info())
            .get(
                "search/flights/prices",
                Query::params(
                    [
                        QueryParam::new("origin", "LON"),
                        QueryParam::new("destination", "BCN"),
                        QueryParam::new("direct", "true"),
                    ]
                    .to_vec(),
                ),
            )
            .await;

        assert_eq!(response.status(), 200);

        env.stop().await;
    }

    #[tokio::test]
    async fn popular_destinations_should_be_sorted_by_price() {
        logging::init();

        let partner_api = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/city-directions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": {
                    "ROM": { "price": 80, "transfers": 0, "airline": "FR" },
                    "BCN": { "price": 45, "transfers": 1, "airline": "VY" }
                }
            })))
            .mount(&partner_api)
            .await;

        let env = Started::new(&with_partner_api(&partner_api).into()).await;

        let popular: Value = assert_json(
            Client::new(env.get_connection_info())
                .get("search/flights/popular", Query::with("origin", "lon"))
                .await,
        )
        .await;

        assert_eq!(popular["origin"], "LON");
        assert_eq!(popular["count"], 2);
        assert_eq!(popular["destinations"][0]["destination"], "BCN");
        assert_eq!(popular["destinations"][1]["destination"], "ROM");

        env.stop().await;
    }

    #[tokio::test]
    async fn hotel_prices_should_link_every_hotel() {
        logging::init();

        let partner_api = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/cache.json"))
            .and(query_param("location", "Barcelona"))
            .and(query_param("checkIn", "2026-05-01"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "hotelName": "Hotel Arts", "locationId": 12345, "priceFrom": 210 }
            ])))
            .mount(&partner_api)
            .await;

        let env = Started::new(&with_partner_api(&partner_api).into()).await;

        let prices: Value = assert_json(
            Client::new(env.get_connection_info())
                .get(
                    "search/hotels/prices",
                    Query::params(
                        [
                            QueryParam::new("location", "Barcelona"),
                            QueryParam::new("check_in", "2026-05-01"),
                            QueryParam::new("check_out", "2026-05-04"),
                        ]
                        .to_vec(),
                    ),
                )
                .await,
        )
        .await;

        assert_eq!(prices["count"], 1);
        assert_eq!(
            prices["hotels"][0]["booking_link"],
            "https://search.hotellook.com?destination=12345&checkIn=2026-05-01&checkOut=2026-05-04&adults=2&marker=tripcompare-test"
        );

        env.stop().await;
    }

    #[tokio::test]
    async fn hotel_lookups_should_be_forwarded_untouched() {
        logging::init();

        let partner_api = MockServer::start().await;

        let suggestions = json!({ "results": { "locations": [{ "cityName": "Barcelona" }] }, "status": "ok" });

        Mock::given(method("GET"))
            .and(path("/api/v2/lookup.json"))
            .and(query_param("query", "barc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(suggestions.clone()))
            .mount(&partner_api)
            .await;

        let env = Started::new(&with_partner_api(&partner_api).into()).await;

        let lookup: Value = assert_json(
            Client::new(env.get_connection_info())
                .get("search/hotels/lookup", Query::with("query", "barc"))
                .await,
        )
        .await;

        assert_eq!(lookup, suggestions);

        env.stop().await;
    }

    #[tokio::test]
    async fn partner_error_statuses_of_the_cheapest_fares_should_be_forwarded() {
        logging::init();

        let partner_api = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/prices/cheap"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&partner_api)
            .await;

        let env = Started::new(&with_partner_api(&partner_api).into()).await;

        let response = Client::new(env.get_connection_info())
            .get(
                "search/flights/prices",
                Query::params([QueryParam::new("origin", "LON"), QueryParam::new("destination", "BCN")].to_vec()),
            )
            .await;

        assert_status(response, 429).await;

        env.stop().await;
    }

    #[tokio::test]
    async fn partner_error_statuses_of_the_calendar_should_be_bad_gateways() {
        logging::init();

        let partner_api = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/prices/calendar"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&partner_api)
            .await;

        let env = Started::new(&with_partner_api(&partner_api).into()).await;

        let response = Client::new(env.get_connection_info())
            .get(
                "search/flights/calendar",
                Query::params(
                    [
                        QueryParam::new("origin", "LON"),
                        QueryParam::new("destination", "BCN"),
                        QueryParam::new("depart_date", "2026-04-01"),
                    ]
                    .to_vec(),
                ),
            )
            .await;

        assert_status(response, 502).await;

        env.stop().await;
    }

    #[tokio::test]
    async fn non_json_partner_responses_should_be_bad_gateways() {
        logging::init();

        let partner_api = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/aviasales/v3/prices_for_dates"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&partner_api)
            .await;

        let env = Started::new(&with_partner_api(&partner_api).into()).await;

        let response = Client::new(env.get_connection_info())
            .get(
                "search/flights/latest",
                Query::params([QueryParam::new("origin", "LON"), QueryParam::new("destination", "BCN")].to_vec()),
            )
            .await;

        assert_status(response, 502).await;

        env.stop().await;
    }

    #[tokio::test]
    async fn an_unreachable_partner_api_should_be_a_bad_gateway() {
        logging::init();

        let mut config = configuration::ephemeral_with_partners();
        config.travelpayouts.flight_api_url = Url::parse("http://127.0.0.1:1").unwrap();

        let env = Started::new(&config.into()).await;

        let response = Client::new(env.get_connection_info())
            .get("search/flights/popular", Query::with("origin", "LON"))
            .await;

        assert_status(response, 502).await;

        env.stop().await;
    }

    #[tokio::test]
    async fn partner_prices_should_fail_before_calling_the_partner_without_a_token() {
        logging::init();

        let partner_api = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": {} })))
            .expect(0)
            .mount(&partner_api)
            .await;

        let mut config = with_partner_api(&partner_api);
        config.travelpayouts.token = None;

        let env = Started::new(&config.into()).await;

        let response = Client::new(env.get_connection_info())
            .get(
                "search/flights/prices",
                Query::params([QueryParam::new("origin", "LON"), QueryParam::new("destination", "BCN")].to_vec()),
            )
            .await;

        assert_status(response, 500).await;

        env.stop().await;
    }

    #[tokio::test]
    async fn airport_codes_should_have_three_letters() {
        logging::init();

        let env = Started::new(&configuration::ephemeral_with_partners().into()).await;

        let response = Client::new(env.get_connection_info())
            .get(
                "search/flights/prices",
                Query::params([QueryParam::new("origin", "LOND"), QueryParam::new("destination", "BCN")].to_vec()),
            )
            .await;

        assert_eq!(response.status(), 400);

        env.stop().await;
    }
}
