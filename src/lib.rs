//! Formula 1 Standings Viewer Library
//!
//! This library fetches Formula 1 championship standings and race calendars
//! from an Ergast-compatible API and renders them as terminal tables. Every
//! fetch degrades to fixed fallback data instead of failing.
//!
//! # Examples
//!
//! ```rust,no_run
//! use f1_hub::config::Config;
//! use f1_hub::data_fetcher::StandingsFetcher;
//! use f1_hub::display::render_driver_standings;
//! use f1_hub::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let fetcher = StandingsFetcher::new(&config)?;
//!
//!     // Never fails: falls back to fixed standings on any error
//!     let standings = fetcher.fetch_standings("2023").await;
//!
//!     let mut stdout = std::io::stdout();
//!     render_driver_standings(&mut stdout, "2023", &standings, true)?;
//!
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod display;
pub mod error;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::models::{ConstructorStandingsEntry, RaceEntry, StandingsEntry};
pub use data_fetcher::{
    StandingsFetcher, mock_constructor_standings, mock_driver_standings, mock_race_schedule,
};
pub use display::{View, ViewData};
pub use error::AppError;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
