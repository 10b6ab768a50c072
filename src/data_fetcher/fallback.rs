//! Fixed data shown whenever the live API cannot be used.
//!
//! Values are the 2023 season end-of-year figures and never change at runtime.

use crate::data_fetcher::models::{ConstructorStandingsEntry, RaceEntry, StandingsEntry};
use chrono::NaiveDate;

fn driver(position: u32, name: &str, team: &str, points: u32, wins: u32) -> StandingsEntry {
    StandingsEntry {
        position,
        driver_name: name.to_string(),
        team_name: team.to_string(),
        points,
        wins,
    }
}

fn constructor(position: u32, name: &str, points: u32, wins: u32) -> ConstructorStandingsEntry {
    ConstructorStandingsEntry {
        position,
        name: name.to_string(),
        points,
        wins,
    }
}

fn race(
    round: u32,
    name: &str,
    circuit: &str,
    (year, month, day): (i32, u32, u32),
    winner: Option<&str>,
) -> RaceEntry {
    RaceEntry {
        round,
        name: name.to_string(),
        circuit: circuit.to_string(),
        // Literal dates below are all valid
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        winner: winner.map(str::to_string),
    }
}

/// Driver standings used when the live fetch fails.
pub fn mock_driver_standings() -> Vec<StandingsEntry> {
    vec![
        driver(1, "Max Verstappen", "Red Bull Racing", 575, 19),
        driver(2, "Sergio Pérez", "Red Bull Racing", 285, 2),
        driver(3, "Lewis Hamilton", "Mercedes", 234, 3),
    ]
}

/// Constructor standings used when the live fetch fails.
pub fn mock_constructor_standings() -> Vec<ConstructorStandingsEntry> {
    vec![
        constructor(1, "Red Bull Racing Honda RBPT", 860, 21),
        constructor(2, "Mercedes", 409, 4),
        constructor(3, "Ferrari", 406, 2),
        constructor(4, "McLaren Mercedes", 302, 0),
        constructor(5, "Aston Martin Aramco Mercedes", 280, 0),
        constructor(6, "Alpine Renault", 120, 0),
        constructor(7, "Williams Mercedes", 28, 0),
        constructor(8, "AlphaTauri Honda RBPT", 25, 0),
    ]
}

/// Race calendar used when the live fetch fails, latest round first.
pub fn mock_race_schedule() -> Vec<RaceEntry> {
    const VERSTAPPEN: Option<&str> = Some("Max Verstappen");
    vec![
        race(22, "Abu Dhabi Grand Prix", "Yas Marina Circuit", (2023, 11, 26), None),
        race(
            21,
            "Las Vegas Grand Prix",
            "Las Vegas Street Circuit",
            (2023, 11, 19),
            VERSTAPPEN,
        ),
        race(
            20,
            "Brazilian Grand Prix",
            "Autódromo José Carlos Pace",
            (2023, 11, 5),
            VERSTAPPEN,
        ),
        race(
            19,
            "United States Grand Prix",
            "Circuit of The Americas",
            (2023, 10, 22),
            VERSTAPPEN,
        ),
        race(
            18,
            "Mexico City Grand Prix",
            "Autódromo Hermanos Rodríguez",
            (2023, 10, 29),
            VERSTAPPEN,
        ),
        race(
            17,
            "Japanese Grand Prix",
            "Suzuka International Racing Course",
            (2023, 9, 24),
            VERSTAPPEN,
        ),
    ]
}
