pub mod schedule;
pub mod standings;

pub use schedule::normalize_race_schedule;
pub use standings::{normalize_constructor_standings, normalize_driver_standings};
