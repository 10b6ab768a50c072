use crate::data_fetcher::models::RaceStatus;
use crossterm::style::Color;

/// Colour palette of the app, as `#rrggbb` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub background: &'static str,
    pub card_background: &'static str,
    pub success: &'static str,
    pub info: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
}

/// F1 red on dark gray.
pub const APP_THEME: Theme = Theme {
    primary: "#e10600",
    secondary: "#1a1a1a",
    accent: "#ffffff",
    text_primary: "#1a1a1a",
    text_secondary: "#666666",
    background: "#f5f5f5",
    card_background: "#ffffff",
    success: "#28a745",
    info: "#007bff",
    warning: "#ffc107",
    error: "#dc3545",
};

impl Theme {
    /// Terminal colour for a palette entry. Unparseable entries map to the
    /// terminal's default colour.
    pub fn color(hex: &str) -> Color {
        hex_to_color(hex).unwrap_or(Color::Reset)
    }

    pub fn title(&self) -> Color {
        Self::color(self.primary)
    }

    pub fn points(&self) -> Color {
        Self::color(self.primary)
    }

    pub fn muted(&self) -> Color {
        Self::color(self.text_secondary)
    }

    /// Badge colour for a race's status: green once run, blue before.
    pub fn race_status(&self, status: RaceStatus) -> Color {
        match status {
            RaceStatus::Completed => Self::color(self.success),
            RaceStatus::Upcoming => Self::color(self.info),
        }
    }
}

/// Parses `#rrggbb` (leading '#' optional) into an RGB terminal colour.
pub fn hex_to_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(Color::Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}
