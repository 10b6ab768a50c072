//! Builders for Ergast-shaped JSON documents, shared by unit and
//! integration tests.

use serde_json::{Value, json};

/// One driver row of a mocked standings document. All numeric fields are
/// strings, as the real API sends them.
#[derive(Debug, Clone)]
pub struct DriverStandingFixture {
    pub position: String,
    pub given_name: String,
    pub family_name: String,
    pub team: String,
    pub points: String,
    pub wins: String,
}

impl DriverStandingFixture {
    pub fn new(
        position: &str,
        given_name: &str,
        family_name: &str,
        team: &str,
        points: &str,
        wins: &str,
    ) -> Self {
        Self {
            position: position.to_string(),
            given_name: given_name.to_string(),
            family_name: family_name.to_string(),
            team: team.to_string(),
            points: points.to_string(),
            wins: wins.to_string(),
        }
    }

    fn to_json(&self) -> Value {
        json!({
            "position": self.position,
            "positionText": self.position,
            "points": self.points,
            "wins": self.wins,
            "Driver": {
                "driverId": self.family_name.to_lowercase(),
                "givenName": self.given_name,
                "familyName": self.family_name,
                "nationality": "Unknown"
            },
            "Constructors": [{
                "constructorId": self.team.to_lowercase().replace(' ', "_"),
                "name": self.team
            }]
        })
    }
}

/// Builds a complete `driverStandings.json` document with one standings list.
pub fn driver_standings_json(entries: &[DriverStandingFixture]) -> Value {
    let standings: Vec<Value> = entries.iter().map(DriverStandingFixture::to_json).collect();
    let total = standings.len().to_string();
    json!({
        "MRData": {
            "xmlns": "http://ergast.com/mrd/1.5",
            "series": "f1",
            "limit": "30",
            "offset": "0",
            "total": total,
            "StandingsTable": {
                "season": "2023",
                "StandingsLists": [{
                    "season": "2023",
                    "round": "22",
                    "DriverStandings": standings
                }]
            }
        }
    })
}

/// Builds a `constructorStandings.json` document from
/// `(position, name, points, wins)` rows.
pub fn constructor_standings_json(entries: &[(&str, &str, &str, &str)]) -> Value {
    let standings: Vec<Value> = entries
        .iter()
        .map(|(position, name, points, wins)| {
            json!({
                "position": position,
                "positionText": position,
                "points": points,
                "wins": wins,
                "Constructor": {
                    "constructorId": name.to_lowercase().replace(' ', "_"),
                    "name": name
                }
            })
        })
        .collect();
    json!({
        "MRData": {
            "series": "f1",
            "StandingsTable": {
                "season": "2023",
                "StandingsLists": [{
                    "season": "2023",
                    "round": "22",
                    "ConstructorStandings": standings
                }]
            }
        }
    })
}

/// Builds a season calendar document from `(round, race, circuit, date)` rows.
pub fn schedule_json(races: &[(&str, &str, &str, &str)]) -> Value {
    let races: Vec<Value> = races
        .iter()
        .map(|(round, name, circuit, date)| {
            json!({
                "season": "2023",
                "round": round,
                "raceName": name,
                "Circuit": {
                    "circuitId": circuit.to_lowercase().replace(' ', "_"),
                    "circuitName": circuit
                },
                "date": date,
                "time": "15:00:00Z"
            })
        })
        .collect();
    json!({
        "MRData": {
            "series": "f1",
            "RaceTable": {
                "season": "2023",
                "Races": races
            }
        }
    })
}
