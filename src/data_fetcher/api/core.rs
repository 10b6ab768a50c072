use crate::config::Config;
use crate::data_fetcher::fallback::{
    mock_constructor_standings, mock_driver_standings, mock_race_schedule,
};
use crate::data_fetcher::models::{
    ConstructorStandingsEntry, ConstructorStandingsResponse, DriverStandingsResponse, RaceEntry,
    ScheduleResponse, StandingsEntry,
};
use crate::data_fetcher::processors::{
    normalize_constructor_standings, normalize_driver_standings, normalize_race_schedule,
};
use crate::error::AppError;
use reqwest::Client;
use tracing::{info, instrument, warn};

use super::fetch_utils::fetch;
use super::http_client::create_http_client_with_timeout;
use super::urls::{build_constructor_standings_url, build_driver_standings_url, build_schedule_url};

/// Fetches championship data for a season and degrades to fixed fallback
/// data instead of failing.
///
/// Every call issues exactly one request; nothing is cached between calls
/// and no retry is attempted. The `try_*` methods expose the underlying
/// error, while the plain methods never fail.
#[derive(Debug, Clone)]
pub struct StandingsFetcher {
    client: Client,
    base_url: String,
}

impl StandingsFetcher {
    /// Creates a fetcher using the configured base URL and request timeout.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self::with_client(client, config.api_base_url.clone()))
    }

    /// Creates a fetcher with a preconfigured client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the drivers' championship for `season`, or the fallback
    /// standings when the request, the status or the document is not usable.
    #[instrument(skip(self))]
    pub async fn fetch_standings(&self, season: &str) -> Vec<StandingsEntry> {
        or_fallback(
            self.try_fetch_standings(season).await,
            "driver standings",
            mock_driver_standings,
        )
    }

    /// Fetches and normalizes the drivers' championship, surfacing errors.
    pub async fn try_fetch_standings(&self, season: &str) -> Result<Vec<StandingsEntry>, AppError> {
        let url = build_driver_standings_url(&self.base_url, season);
        let response: DriverStandingsResponse = fetch(&self.client, &url).await?;
        normalize_driver_standings(response, &url)
    }

    /// Returns the constructors' championship for `season`, or the fallback
    /// table on any failure.
    #[instrument(skip(self))]
    pub async fn fetch_constructor_standings(
        &self,
        season: &str,
    ) -> Vec<ConstructorStandingsEntry> {
        or_fallback(
            self.try_fetch_constructor_standings(season).await,
            "constructor standings",
            mock_constructor_standings,
        )
    }

    pub async fn try_fetch_constructor_standings(
        &self,
        season: &str,
    ) -> Result<Vec<ConstructorStandingsEntry>, AppError> {
        let url = build_constructor_standings_url(&self.base_url, season);
        let response: ConstructorStandingsResponse = fetch(&self.client, &url).await?;
        normalize_constructor_standings(response, &url)
    }

    /// Returns the race calendar for `season`, or the fallback calendar on
    /// any failure.
    #[instrument(skip(self))]
    pub async fn fetch_race_schedule(&self, season: &str) -> Vec<RaceEntry> {
        or_fallback(
            self.try_fetch_race_schedule(season).await,
            "race schedule",
            mock_race_schedule,
        )
    }

    pub async fn try_fetch_race_schedule(&self, season: &str) -> Result<Vec<RaceEntry>, AppError> {
        let url = build_schedule_url(&self.base_url, season);
        let response: ScheduleResponse = fetch(&self.client, &url).await?;
        normalize_race_schedule(response)
    }
}

fn or_fallback<T>(
    result: Result<Vec<T>, AppError>,
    what: &str,
    fallback: fn() -> Vec<T>,
) -> Vec<T> {
    match result {
        Ok(entries) => {
            info!("Fetched {} {what} entries", entries.len());
            entries
        }
        Err(e) => {
            warn!(
                failure = %e.failure_kind(),
                "Using fallback {what} after failed fetch: {e}"
            );
            fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use crate::testing_utils::{
        DriverStandingFixture, constructor_standings_json, driver_standings_json, schedule_json,
    };
    use std::time::Duration;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    fn fetcher_for(mock_server: &MockServer) -> StandingsFetcher {
        StandingsFetcher::with_client(
            create_test_http_client(),
            format!("{}/api/f1", mock_server.uri()),
        )
    }

    async fn mount_json(mock_server: &MockServer, resource: &str, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(resource))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(mock_server)
            .await;
    }

    #[test]
    fn test_new_uses_config() {
        let config = Config {
            api_base_url: "http://localhost:8080/api/f1".to_string(),
            ..Config::default()
        };

        let fetcher = StandingsFetcher::new(&config).unwrap();
        assert_eq!(fetcher.base_url(), "http://localhost:8080/api/f1");
    }

    #[tokio::test]
    async fn test_fetch_standings_scenario() {
        let mock_server = MockServer::start().await;
        mount_json(
            &mock_server,
            "/api/f1/2023/driverStandings.json",
            driver_standings_json(&[DriverStandingFixture::new(
                "1",
                "Max",
                "Verstappen",
                "Red Bull Racing",
                "575",
                "19",
            )]),
        )
        .await;

        let standings = fetcher_for(&mock_server).fetch_standings("2023").await;

        assert_eq!(
            standings,
            vec![StandingsEntry {
                position: 1,
                driver_name: "Max Verstappen".to_string(),
                team_name: "Red Bull Racing".to_string(),
                points: 575,
                wins: 19,
            }]
        );
    }

    #[tokio::test]
    async fn test_fetch_standings_server_error_uses_fallback() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/f1/2023/driverStandings.json"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let fetcher = fetcher_for(&mock_server);
        let error = fetcher.try_fetch_standings("2023").await.unwrap_err();
        assert!(matches!(error, AppError::ApiServerError { status: 500, .. }));

        assert_eq!(fetcher.fetch_standings("2023").await, mock_driver_standings());
    }

    #[tokio::test]
    async fn test_fetch_standings_unknown_season_uses_fallback() {
        let mock_server = MockServer::start().await;

        let standings = fetcher_for(&mock_server).fetch_standings("1900").await;

        assert_eq!(standings, mock_driver_standings());
    }

    #[tokio::test]
    async fn test_fetch_standings_missing_field_uses_fallback() {
        let mock_server = MockServer::start().await;
        let mut body = driver_standings_json(&[DriverStandingFixture::new(
            "1",
            "Max",
            "Verstappen",
            "Red Bull Racing",
            "575",
            "19",
        )]);
        body["MRData"]["StandingsTable"]["StandingsLists"][0]["DriverStandings"][0]
            .as_object_mut()
            .unwrap()
            .remove("wins");
        mount_json(&mock_server, "/api/f1/2023/driverStandings.json", body).await;

        let fetcher = fetcher_for(&mock_server);
        let error = fetcher.try_fetch_standings("2023").await.unwrap_err();
        assert!(matches!(error, AppError::ApiUnexpectedStructure { .. }));
        assert_eq!(fetcher.fetch_standings("2023").await, mock_driver_standings());
    }

    #[tokio::test]
    async fn test_fetch_standings_timeout_uses_fallback() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/f1/2023/driverStandings.json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(driver_standings_json(&[]))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&mock_server)
            .await;

        let fetcher = StandingsFetcher::with_client(
            create_http_client_with_timeout(1).unwrap(),
            format!("{}/api/f1", mock_server.uri()),
        );

        let error = fetcher.try_fetch_standings("2023").await.unwrap_err();
        assert!(matches!(error, AppError::NetworkTimeout { .. }));
        assert_eq!(fetcher.fetch_standings("2023").await, mock_driver_standings());
    }

    #[tokio::test]
    async fn test_fetch_constructor_standings() {
        let mock_server = MockServer::start().await;
        mount_json(
            &mock_server,
            "/api/f1/2023/constructorStandings.json",
            constructor_standings_json(&[
                ("1", "Red Bull", "860", "21"),
                ("2", "Mercedes", "409", "0"),
            ]),
        )
        .await;

        let standings = fetcher_for(&mock_server)
            .fetch_constructor_standings("2023")
            .await;

        assert_eq!(standings.len(), 2);
        assert_eq!(standings[0].name, "Red Bull");
        assert_eq!(standings[1].points, 409);
    }

    #[tokio::test]
    async fn test_fetch_constructor_standings_fallback() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/f1/2023/constructorStandings.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let standings = fetcher_for(&mock_server)
            .fetch_constructor_standings("2023")
            .await;

        assert_eq!(standings, mock_constructor_standings());
    }

    #[tokio::test]
    async fn test_fetch_race_schedule() {
        let mock_server = MockServer::start().await;
        mount_json(
            &mock_server,
            "/api/f1/2023.json",
            schedule_json(&[(
                "1",
                "Bahrain Grand Prix",
                "Bahrain International Circuit",
                "2023-03-05",
            )]),
        )
        .await;

        let schedule = fetcher_for(&mock_server).fetch_race_schedule("2023").await;

        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule[0].name, "Bahrain Grand Prix");
        assert_eq!(schedule[0].circuit, "Bahrain International Circuit");
    }

    #[tokio::test]
    async fn test_fetch_race_schedule_fallback() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/f1/2023.json"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let schedule = fetcher_for(&mock_server).fetch_race_schedule("2023").await;

        assert_eq!(schedule, mock_race_schedule());
    }

    #[tokio::test]
    async fn test_every_call_refetches() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/f1/2023/driverStandings.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(driver_standings_json(&[
                DriverStandingFixture::new(
                    "1",
                    "Max",
                    "Verstappen",
                    "Red Bull Racing",
                    "575",
                    "19",
                ),
            ])))
            .expect(2)
            .mount(&mock_server)
            .await;

        let fetcher = fetcher_for(&mock_server);
        let first = fetcher.fetch_standings("2023").await;
        let second = fetcher.fetch_standings("2023").await;

        assert_eq!(first, second);
        mock_server.verify().await;
    }
}
