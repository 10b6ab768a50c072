use crate::data_fetcher::models::{
    ApiConstructorStanding, ApiDriverStanding, ConstructorStandingsEntry,
    ConstructorStandingsResponse, DriverStandingsResponse, StandingsEntry,
};
use crate::error::AppError;
use tracing::debug;

/// Normalizes a driver standings document into display records.
///
/// Only the first standings list is read. Every entry must normalize; the
/// first entry that does not fails the whole document, so callers never see
/// a partial table.
///
/// # Arguments
/// * `response` - Deserialized API document
/// * `url` - Source URL, used for error context
///
/// # Returns
/// * `Ok(Vec<StandingsEntry>)` - Entries in the order the API ranked them
/// * `Err(AppError)` - The document has no standings list or an entry is invalid
///
/// # Example
/// ```
/// use f1_hub::data_fetcher::models::DriverStandingsResponse;
/// use f1_hub::data_fetcher::processors::normalize_driver_standings;
///
/// let json = r#"{"MRData":{"StandingsTable":{"StandingsLists":[{"DriverStandings":[
///     {"position":"1","points":"575","wins":"19",
///      "Driver":{"givenName":"Max","familyName":"Verstappen"},
///      "Constructors":[{"name":"Red Bull Racing"}]}
/// ]}]}}}"#;
/// let response: DriverStandingsResponse = serde_json::from_str(json).unwrap();
/// let entries = normalize_driver_standings(response, "http://example.com").unwrap();
/// assert_eq!(entries[0].driver_name, "Max Verstappen");
/// assert_eq!(entries[0].points, 575);
/// ```
pub fn normalize_driver_standings(
    response: DriverStandingsResponse,
    url: &str,
) -> Result<Vec<StandingsEntry>, AppError> {
    let list = response
        .mr_data
        .standings_table
        .standings_lists
        .into_iter()
        .next()
        .ok_or_else(|| AppError::api_no_data("Response contains no standings lists", url))?;

    debug!(
        "Normalizing {} driver standings (season {:?}, round {:?})",
        list.driver_standings.len(),
        list.season,
        list.round
    );

    list.driver_standings
        .into_iter()
        .map(|standing| normalize_driver_standing(standing, url))
        .collect()
}

fn normalize_driver_standing(
    standing: ApiDriverStanding,
    url: &str,
) -> Result<StandingsEntry, AppError> {
    let position = standing.position.to_u32_at_least("position", 1)?;
    let team_name = standing
        .constructors
        .into_iter()
        .next()
        .map(|constructor| constructor.name)
        .ok_or_else(|| {
            AppError::api_unexpected_structure(
                format!("Driver standing at position {position} has no constructors"),
                url,
            )
        })?;

    Ok(StandingsEntry {
        position,
        driver_name: format!(
            "{} {}",
            standing.driver.given_name, standing.driver.family_name
        ),
        team_name,
        points: standing.points.to_u32_at_least("points", 0)?,
        wins: standing.wins.to_u32_at_least("wins", 0)?,
    })
}

/// Normalizes a constructor standings document, with the same
/// first-list-only and all-or-nothing rules as the driver standings.
pub fn normalize_constructor_standings(
    response: ConstructorStandingsResponse,
    url: &str,
) -> Result<Vec<ConstructorStandingsEntry>, AppError> {
    let list = response
        .mr_data
        .standings_table
        .standings_lists
        .into_iter()
        .next()
        .ok_or_else(|| AppError::api_no_data("Response contains no standings lists", url))?;

    debug!(
        "Normalizing {} constructor standings",
        list.constructor_standings.len()
    );

    list.constructor_standings
        .into_iter()
        .map(normalize_constructor_standing)
        .collect()
}

fn normalize_constructor_standing(
    standing: ApiConstructorStanding,
) -> Result<ConstructorStandingsEntry, AppError> {
    Ok(ConstructorStandingsEntry {
        position: standing.position.to_u32_at_least("position", 1)?,
        name: standing.constructor.name,
        points: standing.points.to_u32_at_least("points", 0)?,
        wins: standing.wins.to_u32_at_least("wins", 0)?,
    })
}
