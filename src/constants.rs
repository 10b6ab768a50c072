//! Application-wide constants and configuration values
//!
//! This module centralizes the magic numbers and default settings so the
//! config layer, the fetcher and the display agree on them.

/// Default base URL of the Ergast-compatible F1 API
pub const DEFAULT_API_BASE_URL: &str = "http://ergast.com/api/f1";

/// Season shown when neither the config nor the command line names one
pub const DEFAULT_SEASON: &str = "2023";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 10;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 4;

/// Default interval between data refreshes in watch mode (seconds)
pub const DEFAULT_REFRESH_INTERVAL_SECONDS: u64 = 60;

/// Name used for the config directory and the default log file
pub const APP_DIR_NAME: &str = "f1_hub";

/// Default log file name inside the log directory
pub const LOG_FILE_NAME: &str = "f1_hub.log";

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API base URL override
    pub const API_BASE_URL: &str = "F1_HUB_API_BASE_URL";

    /// Environment variable for season override
    pub const SEASON: &str = "F1_HUB_SEASON";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "F1_HUB_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "F1_HUB_HTTP_TIMEOUT";

    /// Environment variable for refresh interval override in seconds
    pub const REFRESH_INTERVAL: &str = "F1_HUB_REFRESH_INTERVAL";
}

/// Resource paths under the season segment of the API
pub mod endpoints {
    /// Driver championship standings
    pub const DRIVER_STANDINGS: &str = "driverStandings.json";

    /// Constructor championship standings
    pub const CONSTRUCTOR_STANDINGS: &str = "constructorStandings.json";
}

/// Table layout
pub mod display {
    /// Width of the position column
    pub const POSITION_WIDTH: usize = 4;

    /// Width of the driver / constructor / race name column
    pub const NAME_WIDTH: usize = 30;

    /// Width of the team / circuit column
    pub const TEAM_WIDTH: usize = 36;

    /// Width of the points column
    pub const POINTS_WIDTH: usize = 8;

    /// Width of the wins column
    pub const WINS_WIDTH: usize = 5;

    /// Width of the race date column
    pub const DATE_WIDTH: usize = 14;

    /// Width of the race status column
    pub const STATUS_WIDTH: usize = 11;

    /// Shown in place of a winner for races without one
    pub const WINNER_PLACEHOLDER: &str = "TBD";

    /// Date format used for race dates, e.g. "Nov 26, 2023"
    pub const RACE_DATE_FORMAT: &str = "%b %d, %Y";
}
