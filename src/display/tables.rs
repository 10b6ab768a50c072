use super::theme::APP_THEME;
use crate::constants::display::{
    DATE_WIDTH, NAME_WIDTH, POINTS_WIDTH, POSITION_WIDTH, RACE_DATE_FORMAT, STATUS_WIDTH,
    TEAM_WIDTH, WINNER_PLACEHOLDER, WINS_WIDTH,
};
use crate::data_fetcher::models::{ConstructorStandingsEntry, RaceEntry, StandingsEntry};
use crate::error::AppError;
use chrono::{Local, NaiveDate};
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use std::io::Write;
use unicode_width::UnicodeWidthStr;

/// Pads `text` with spaces to `width` terminal columns, or cuts it short
/// with an ellipsis when it does not fit.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width <= width {
        return format!("{text}{}", " ".repeat(width - text_width));
    }
    if width == 0 {
        return String::new();
    }

    let mut truncated = String::new();
    for ch in text.chars() {
        let candidate = format!("{truncated}{ch}");
        if candidate.width() + 1 > width {
            break;
        }
        truncated = candidate;
    }
    truncated.push('…');
    pad_to_width(&truncated, width)
}

/// Writes optionally coloured text.
struct Painter<'a, W: Write> {
    out: &'a mut W,
    colors: bool,
}

impl<'a, W: Write> Painter<'a, W> {
    fn new(out: &'a mut W, colors: bool) -> Self {
        Self { out, colors }
    }

    fn text(&mut self, text: &str, color: Option<Color>) -> std::io::Result<()> {
        match color {
            Some(color) if self.colors => {
                queue!(self.out, SetForegroundColor(color), Print(text), ResetColor)
            }
            _ => write!(self.out, "{text}"),
        }
    }

    fn heading(&mut self, text: &str) -> std::io::Result<()> {
        if self.colors {
            queue!(
                self.out,
                SetAttribute(Attribute::Bold),
                SetForegroundColor(APP_THEME.title()),
                Print(text),
                ResetColor,
                SetAttribute(Attribute::Reset)
            )?;
        } else {
            write!(self.out, "{text}")?;
        }
        self.newline()
    }

    fn newline(&mut self) -> std::io::Result<()> {
        writeln!(self.out)
    }

    fn finish(self) -> std::io::Result<()> {
        self.out.flush()
    }
}

/// Renders the drivers' championship as a table.
pub fn render_driver_standings<W: Write>(
    out: &mut W,
    season: &str,
    entries: &[StandingsEntry],
    colors: bool,
) -> Result<(), AppError> {
    let mut painter = Painter::new(out, colors);
    painter.heading(&format!("DRIVER STANDINGS {season}"))?;

    let header = format!(
        "{}{}{}{}{}",
        pad_to_width("POS", POSITION_WIDTH),
        pad_to_width("DRIVER", NAME_WIDTH),
        pad_to_width("TEAM", TEAM_WIDTH),
        pad_to_width("PTS", POINTS_WIDTH),
        pad_to_width("WINS", WINS_WIDTH),
    );
    painter.text(header.trim_end(), Some(APP_THEME.muted()))?;
    painter.newline()?;

    for entry in entries {
        painter.text(&pad_to_width(&entry.position.to_string(), POSITION_WIDTH), None)?;
        painter.text(&pad_to_width(&entry.driver_name, NAME_WIDTH), None)?;
        painter.text(&pad_to_width(&entry.team_name, TEAM_WIDTH), Some(APP_THEME.muted()))?;
        painter.text(
            &pad_to_width(&entry.points.to_string(), POINTS_WIDTH),
            Some(APP_THEME.points()),
        )?;
        painter.text(&entry.wins.to_string(), None)?;
        painter.newline()?;
    }

    painter.finish()?;
    Ok(())
}

/// Renders the constructors' championship as a table.
pub fn render_constructor_standings<W: Write>(
    out: &mut W,
    season: &str,
    entries: &[ConstructorStandingsEntry],
    colors: bool,
) -> Result<(), AppError> {
    let mut painter = Painter::new(out, colors);
    painter.heading(&format!("CONSTRUCTOR STANDINGS {season}"))?;

    let header = format!(
        "{}{}{}{}",
        pad_to_width("POS", POSITION_WIDTH),
        pad_to_width("CONSTRUCTOR", TEAM_WIDTH),
        pad_to_width("PTS", POINTS_WIDTH),
        pad_to_width("WINS", WINS_WIDTH),
    );
    painter.text(header.trim_end(), Some(APP_THEME.muted()))?;
    painter.newline()?;

    for entry in entries {
        painter.text(&pad_to_width(&entry.position.to_string(), POSITION_WIDTH), None)?;
        painter.text(&pad_to_width(&entry.name, TEAM_WIDTH), None)?;
        painter.text(
            &pad_to_width(&entry.points.to_string(), POINTS_WIDTH),
            Some(APP_THEME.points()),
        )?;
        painter.text(&entry.wins.to_string(), None)?;
        painter.newline()?;
    }

    painter.finish()?;
    Ok(())
}

/// Renders a season calendar as a table, judging race status against the
/// local date.
pub fn render_race_schedule<W: Write>(
    out: &mut W,
    season: &str,
    races: &[RaceEntry],
    colors: bool,
) -> Result<(), AppError> {
    render_race_schedule_on(out, season, races, Local::now().date_naive(), colors)
}

/// Renders a season calendar as a table with race status relative to `today`.
pub fn render_race_schedule_on<W: Write>(
    out: &mut W,
    season: &str,
    races: &[RaceEntry],
    today: NaiveDate,
    colors: bool,
) -> Result<(), AppError> {
    let mut painter = Painter::new(out, colors);
    painter.heading(&format!("RACE SCHEDULE {season}"))?;

    let header = format!(
        "{}{}{}{}{}WINNER",
        pad_to_width("RND", POSITION_WIDTH),
        pad_to_width("GRAND PRIX", NAME_WIDTH),
        pad_to_width("CIRCUIT", TEAM_WIDTH),
        pad_to_width("DATE", DATE_WIDTH),
        pad_to_width("STATUS", STATUS_WIDTH),
    );
    painter.text(&header, Some(APP_THEME.muted()))?;
    painter.newline()?;

    for race in races {
        let status = race.status_on(today);
        painter.text(&pad_to_width(&race.round.to_string(), POSITION_WIDTH), None)?;
        painter.text(&pad_to_width(&race.name, NAME_WIDTH), None)?;
        painter.text(&pad_to_width(&race.circuit, TEAM_WIDTH), Some(APP_THEME.muted()))?;
        painter.text(
            &pad_to_width(&race.date.format(RACE_DATE_FORMAT).to_string(), DATE_WIDTH),
            Some(APP_THEME.points()),
        )?;
        painter.text(
            &pad_to_width(status.label(), STATUS_WIDTH),
            Some(APP_THEME.race_status(status)),
        )?;
        painter.text(race.winner.as_deref().unwrap_or(WINNER_PLACEHOLDER), None)?;
        painter.newline()?;
    }

    painter.finish()?;
    Ok(())
}
