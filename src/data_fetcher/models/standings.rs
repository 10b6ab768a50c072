use super::numeric::LooseInteger;
use serde::{Deserialize, Serialize};

/// Top-level envelope every Ergast response is wrapped in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErgastResponse<T> {
    #[serde(rename = "MRData")]
    pub mr_data: T,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsData<L> {
    #[serde(rename = "StandingsTable")]
    pub standings_table: StandingsTable<L>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsTable<L> {
    #[serde(default)]
    pub season: Option<String>,
    #[serde(rename = "StandingsLists")]
    pub standings_lists: Vec<L>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverStandingsList {
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub round: Option<String>,
    #[serde(rename = "DriverStandings")]
    pub driver_standings: Vec<ApiDriverStanding>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiDriverStanding {
    pub position: LooseInteger,
    pub points: LooseInteger,
    pub wins: LooseInteger,
    #[serde(rename = "Driver")]
    pub driver: ApiDriver,
    #[serde(rename = "Constructors")]
    pub constructors: Vec<ApiConstructor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiDriver {
    #[serde(rename = "givenName")]
    pub given_name: String,
    #[serde(rename = "familyName")]
    pub family_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConstructor {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstructorStandingsList {
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub round: Option<String>,
    #[serde(rename = "ConstructorStandings")]
    pub constructor_standings: Vec<ApiConstructorStanding>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConstructorStanding {
    pub position: LooseInteger,
    pub points: LooseInteger,
    pub wins: LooseInteger,
    #[serde(rename = "Constructor")]
    pub constructor: ApiConstructor,
}

/// `GET {base}/{season}/driverStandings.json`
pub type DriverStandingsResponse = ErgastResponse<StandingsData<DriverStandingsList>>;

/// `GET {base}/{season}/constructorStandings.json`
pub type ConstructorStandingsResponse = ErgastResponse<StandingsData<ConstructorStandingsList>>;

/// One row of the drivers' championship, normalized from the API document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StandingsEntry {
    pub position: u32,
    pub driver_name: String,
    pub team_name: String,
    pub points: u32,
    pub wins: u32,
}

/// One row of the constructors' championship.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConstructorStandingsEntry {
    pub position: u32,
    pub name: String,
    pub points: u32,
    pub wins: u32,
}
