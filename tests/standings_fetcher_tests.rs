use f1_hub::{
    AppError, StandingsEntry, StandingsFetcher,
    data_fetcher::api::create_http_client_with_timeout,
    mock_driver_standings,
    testing_utils::{DriverStandingFixture, driver_standings_json},
};
use std::time::Duration;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

const STANDINGS_PATH: &str = "/api/f1/2023/driverStandings.json";

fn fetcher_with_timeout(mock_server: &MockServer, timeout_seconds: u64) -> StandingsFetcher {
    StandingsFetcher::with_client(
        create_http_client_with_timeout(timeout_seconds).unwrap(),
        format!("{}/api/f1", mock_server.uri()),
    )
}

fn fetcher(mock_server: &MockServer) -> StandingsFetcher {
    fetcher_with_timeout(mock_server, 5)
}

async fn respond_with(mock_server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(STANDINGS_PATH))
        .respond_with(template)
        .mount(mock_server)
        .await;
}

fn three_drivers() -> serde_json::Value {
    driver_standings_json(&[
        DriverStandingFixture::new("1", "Max", "Verstappen", "Red Bull", "575", "19"),
        DriverStandingFixture::new("2", "Sergio", "Pérez", "Red Bull", "285", "2"),
        DriverStandingFixture::new("3", "Lewis", "Hamilton", "Mercedes", "234", "0"),
    ])
}

/// Live data is returned in document order with string fields converted
#[tokio::test]
async fn test_live_standings_are_normalized_in_order() {
    let mock_server = MockServer::start().await;
    respond_with(&mock_server, ResponseTemplate::new(200).set_body_json(three_drivers())).await;

    let standings = fetcher(&mock_server).fetch_standings("2023").await;

    let names: Vec<&str> = standings.iter().map(|e| e.driver_name.as_str()).collect();
    assert_eq!(names, vec!["Max Verstappen", "Sergio Pérez", "Lewis Hamilton"]);
    assert_eq!(standings[1].team_name, "Red Bull");
    assert_eq!(standings[2].points, 234);
    assert_eq!(standings[2].wins, 0);
}

/// A live result identical to the fallback is still the live result
#[tokio::test]
async fn test_live_standings_returned_even_when_equal_to_fallback() {
    let mock_server = MockServer::start().await;
    respond_with(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(driver_standings_json(&[
            DriverStandingFixture::new("1", "Max", "Verstappen", "Red Bull Racing", "575", "19"),
            DriverStandingFixture::new("2", "Sergio", "Pérez", "Red Bull Racing", "285", "2"),
            DriverStandingFixture::new("3", "Lewis", "Hamilton", "Mercedes", "234", "3"),
        ])),
    )
    .await;

    let fetcher = fetcher(&mock_server);
    assert_eq!(
        fetcher.try_fetch_standings("2023").await.unwrap(),
        mock_driver_standings()
    );
}

/// Transport, status and shape failures all yield the fallback table
#[tokio::test]
async fn test_failures_fall_back() {
    let cases = [
        ResponseTemplate::new(404),
        ResponseTemplate::new(500),
        ResponseTemplate::new(503),
        ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"),
        ResponseTemplate::new(200).set_body_string(""),
        ResponseTemplate::new(200).set_body_json(serde_json::json!({"MRData": {}})),
    ];

    for template in cases {
        let mock_server = MockServer::start().await;
        respond_with(&mock_server, template).await;

        let standings = fetcher(&mock_server).fetch_standings("2023").await;
        assert_eq!(standings, mock_driver_standings());
    }
}

/// One malformed entry discards the whole live result
#[tokio::test]
async fn test_single_bad_entry_discards_everything() {
    let mock_server = MockServer::start().await;
    respond_with(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(driver_standings_json(&[
            DriverStandingFixture::new("1", "Max", "Verstappen", "Red Bull", "575", "19"),
            DriverStandingFixture::new("2", "Sergio", "Pérez", "Red Bull", "lots", "2"),
        ])),
    )
    .await;

    let fetcher = fetcher(&mock_server);
    let error = fetcher.try_fetch_standings("2023").await.unwrap_err();
    assert!(matches!(error, AppError::ApiInvalidField { .. }));
    assert_eq!(fetcher.fetch_standings("2023").await, mock_driver_standings());
}

/// Numbers sent as JSON numbers are accepted alongside strings
#[tokio::test]
async fn test_numeric_fields_accept_numbers() {
    let mock_server = MockServer::start().await;
    let mut body = three_drivers();
    body["MRData"]["StandingsTable"]["StandingsLists"][0]["DriverStandings"][0]["points"] =
        serde_json::json!(575);
    respond_with(&mock_server, ResponseTemplate::new(200).set_body_json(body)).await;

    let standings = fetcher(&mock_server).fetch_standings("2023").await;
    assert_eq!(standings[0].points, 575);
    assert_eq!(standings.len(), 3);
}

/// An empty championship is a valid live result, not a failure
#[tokio::test]
async fn test_empty_standings_list_is_returned() {
    let mock_server = MockServer::start().await;
    respond_with(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(driver_standings_json(&[])),
    )
    .await;

    let standings = fetcher(&mock_server).fetch_standings("2023").await;
    assert_eq!(standings, Vec::<StandingsEntry>::new());
}

/// A response slower than the client timeout yields the fallback
#[tokio::test]
async fn test_slow_response_falls_back() {
    let mock_server = MockServer::start().await;
    respond_with(
        &mock_server,
        ResponseTemplate::new(200)
            .set_body_json(three_drivers())
            .set_delay(Duration::from_secs(3)),
    )
    .await;

    let standings = fetcher_with_timeout(&mock_server, 1)
        .fetch_standings("2023")
        .await;
    assert_eq!(standings, mock_driver_standings());
}

/// Nothing listening on the port yields the fallback
#[tokio::test]
async fn test_unreachable_host_falls_back() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}/api/f1", listener.local_addr().unwrap());
    drop(listener);

    let fetcher =
        StandingsFetcher::with_client(create_http_client_with_timeout(2).unwrap(), base_url);

    let error = fetcher.try_fetch_standings("2023").await.unwrap_err();
    assert!(matches!(
        error,
        AppError::NetworkConnection { .. } | AppError::ApiFetch(_)
    ));
    assert_eq!(fetcher.fetch_standings("2023").await, mock_driver_standings());
}

/// Each call goes to the network; a recovered API is picked up at once
#[tokio::test]
async fn test_recovers_after_failure() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(STANDINGS_PATH))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(STANDINGS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(three_drivers()))
        .mount(&mock_server)
        .await;

    let fetcher = fetcher(&mock_server);
    assert_eq!(fetcher.fetch_standings("2023").await, mock_driver_standings());

    let live = fetcher.fetch_standings("2023").await;
    assert_eq!(live[2].driver_name, "Lewis Hamilton");
    assert_eq!(live[2].wins, 0);
}

/// A trailing slash on the base URL does not produce a double slash
#[tokio::test]
async fn test_trailing_slash_base_url() {
    let mock_server = MockServer::start().await;
    respond_with(&mock_server, ResponseTemplate::new(200).set_body_json(three_drivers())).await;

    let fetcher = StandingsFetcher::with_client(
        create_http_client_with_timeout(5).unwrap(),
        format!("{}/api/f1/", mock_server.uri()),
    );

    assert_eq!(fetcher.try_fetch_standings("2023").await.unwrap().len(), 3);
}
