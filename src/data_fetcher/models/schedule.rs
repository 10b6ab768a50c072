use super::numeric::LooseInteger;
use super::standings::ErgastResponse;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceTableData {
    #[serde(rename = "RaceTable")]
    pub race_table: RaceTable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceTable {
    #[serde(default)]
    pub season: Option<String>,
    #[serde(rename = "Races")]
    pub races: Vec<ApiRace>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiRace {
    pub round: LooseInteger,
    #[serde(rename = "raceName")]
    pub race_name: String,
    #[serde(rename = "Circuit")]
    pub circuit: ApiCircuit,
    pub date: String,
    #[serde(default)]
    pub time: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiCircuit {
    #[serde(rename = "circuitName")]
    pub circuit_name: String,
}

/// `GET {base}/{season}.json`
pub type ScheduleResponse = ErgastResponse<RaceTableData>;

/// Whether a race has been run yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RaceStatus {
    Upcoming,
    Completed,
}

impl RaceStatus {
    pub fn label(self) -> &'static str {
        match self {
            RaceStatus::Upcoming => "UPCOMING",
            RaceStatus::Completed => "COMPLETED",
        }
    }
}

/// One race weekend of a season calendar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RaceEntry {
    pub round: u32,
    pub name: String,
    pub circuit: String,
    pub date: NaiveDate,
    /// Winning driver, when known. The calendar endpoint does not carry it.
    pub winner: Option<String>,
}

impl RaceEntry {
    /// Status relative to `today`. A race on `today` counts as upcoming.
    pub fn status_on(&self, today: NaiveDate) -> RaceStatus {
        if self.date < today {
            RaceStatus::Completed
        } else {
            RaceStatus::Upcoming
        }
    }

    /// Status relative to the local date.
    pub fn status(&self) -> RaceStatus {
        self.status_on(Local::now().date_naive())
    }
}
