//! Terminal presentation of standings and calendars

pub mod tables;
pub mod theme;

pub use tables::{
    pad_to_width, render_constructor_standings, render_driver_standings, render_race_schedule,
    render_race_schedule_on,
};
pub use theme::{APP_THEME, Theme};

use crate::data_fetcher::models::{ConstructorStandingsEntry, RaceEntry, StandingsEntry};
use crate::error::AppError;
use std::io::Write;

/// Which table to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum View {
    #[default]
    Drivers,
    Constructors,
    Schedule,
}

/// Data loaded for one [`View`].
#[derive(Debug, Clone, PartialEq)]
pub enum ViewData {
    Drivers(Vec<StandingsEntry>),
    Constructors(Vec<ConstructorStandingsEntry>),
    Schedule(Vec<RaceEntry>),
}

/// Renders whichever table `data` holds.
pub fn render_view<W: Write>(
    out: &mut W,
    season: &str,
    data: &ViewData,
    colors: bool,
) -> Result<(), AppError> {
    match data {
        ViewData::Drivers(entries) => render_driver_standings(out, season, entries, colors),
        ViewData::Constructors(entries) => {
            render_constructor_standings(out, season, entries, colors)
        }
        ViewData::Schedule(races) => render_race_schedule(out, season, races, colors),
    }
}
