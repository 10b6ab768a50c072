use crate::data_fetcher::models::{ApiRace, RaceEntry, ScheduleResponse};
use crate::error::AppError;
use chrono::NaiveDate;

/// Normalizes a season calendar into race entries, in API order.
/// A race with an unparseable round or date fails the whole calendar.
pub fn normalize_race_schedule(response: ScheduleResponse) -> Result<Vec<RaceEntry>, AppError> {
    response
        .mr_data
        .race_table
        .races
        .into_iter()
        .map(normalize_race)
        .collect()
}

fn normalize_race(race: ApiRace) -> Result<RaceEntry, AppError> {
    let date = NaiveDate::parse_from_str(race.date.trim(), "%Y-%m-%d")
        .map_err(|e| AppError::api_invalid_field("date", race.date.clone(), e.to_string()))?;

    Ok(RaceEntry {
        round: race.round.to_u32_at_least("round", 1)?,
        name: race.race_name,
        circuit: race.circuit.circuit_name,
        date,
        winner: None,
    })
}
