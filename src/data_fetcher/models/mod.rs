pub mod numeric;
pub mod schedule;
pub mod standings;

pub use numeric::LooseInteger;
pub use schedule::{
    ApiCircuit, ApiRace, RaceEntry, RaceStatus, RaceTable, RaceTableData, ScheduleResponse,
};
pub use standings::{
    ApiConstructor, ApiConstructorStanding, ApiDriver, ApiDriverStanding,
    ConstructorStandingsEntry, ConstructorStandingsList, ConstructorStandingsResponse,
    DriverStandingsList, DriverStandingsResponse, ErgastResponse, StandingsData, StandingsEntry,
    StandingsTable,
};
