pub mod api;
pub mod fallback;
pub mod models;
pub mod processors;

pub use api::StandingsFetcher;
pub use fallback::{mock_constructor_standings, mock_driver_standings, mock_race_schedule};
pub use models::{ConstructorStandingsEntry, RaceEntry, StandingsEntry};
