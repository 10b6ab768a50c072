//! URL building utilities for API endpoints

use crate::constants::endpoints;

fn season_url(base_url: &str, season: &str, resource: &str) -> String {
    format!("{}/{season}/{resource}", base_url.trim_end_matches('/'))
}

/// Builds the driver standings URL for a season.
///
/// # Example
/// ```
/// use f1_hub::data_fetcher::api::build_driver_standings_url;
///
/// let url = build_driver_standings_url("http://ergast.com/api/f1", "2023");
/// assert_eq!(url, "http://ergast.com/api/f1/2023/driverStandings.json");
/// ```
pub fn build_driver_standings_url(base_url: &str, season: &str) -> String {
    season_url(base_url, season, endpoints::DRIVER_STANDINGS)
}

/// Builds the constructor standings URL for a season.
///
/// # Example
/// ```
/// use f1_hub::data_fetcher::api::build_constructor_standings_url;
///
/// let url = build_constructor_standings_url("http://ergast.com/api/f1/", "2023");
/// assert_eq!(url, "http://ergast.com/api/f1/2023/constructorStandings.json");
/// ```
pub fn build_constructor_standings_url(base_url: &str, season: &str) -> String {
    season_url(base_url, season, endpoints::CONSTRUCTOR_STANDINGS)
}

/// Builds the race calendar URL for a season.
///
/// # Example
/// ```
/// use f1_hub::data_fetcher::api::build_schedule_url;
///
/// let url = build_schedule_url("http://ergast.com/api/f1", "2023");
/// assert_eq!(url, "http://ergast.com/api/f1/2023.json");
/// ```
pub fn build_schedule_url(base_url: &str, season: &str) -> String {
    format!("{}/{season}.json", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_are_not_doubled() {
        assert_eq!(
            build_driver_standings_url("http://localhost:8080//", "2021"),
            "http://localhost:8080/2021/driverStandings.json"
        );
        assert_eq!(
            build_schedule_url("http://localhost:8080/", "2021"),
            "http://localhost:8080/2021.json"
        );
    }

    #[test]
    fn test_season_is_used_verbatim() {
        assert_eq!(
            build_constructor_standings_url("http://localhost", "current"),
            "http://localhost/current/constructorStandings.json"
        );
    }
}
