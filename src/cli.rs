use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use f1_hub::display::View;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the application should run without the refresh loop.
/// Non-interactive mode is used when any of these conditions are met:
/// - --once flag is set (print once and exit)
/// - config operations are requested
pub fn is_noninteractive_mode(args: &Args) -> bool {
    args.once || is_config_operation(args)
}

/// True when the invocation only reads or edits the config file.
pub fn is_config_operation(args: &Args) -> bool {
    args.new_api_base_url.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

/// Formula 1 standings in the terminal
///
/// Shows the drivers' or constructors' championship, or the race calendar,
/// for a season. Data comes from an Ergast-compatible API; when it cannot
/// be reached the last known 2023 tables are shown instead.
///
/// By default the table is redrawn every minute until Ctrl-C is pressed.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Season to show, e.g. 2023. Defaults to the configured season.
    #[arg(short, long)]
    pub season: Option<String>,

    /// Table to show.
    #[arg(short, long, value_enum, default_value_t = View::Drivers, help_heading = "Display Options")]
    pub view: View,

    /// Print the table once and exit. Useful for scripts.
    #[arg(short, long)]
    pub once: bool,

    /// Disable colors in the output.
    #[arg(long = "plain", short = 'p', help_heading = "Display Options")]
    pub plain: bool,

    /// Seconds between refreshes (overrides the configured interval).
    #[arg(long = "refresh-interval", help_heading = "Display Options")]
    pub refresh_interval: Option<u64>,

    /// Update the API base URL in config.
    #[arg(long = "config", help_heading = "Configuration", value_name = "API_BASE_URL")]
    pub new_api_base_url: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug mode which doesn't clear the terminal between refreshes.
    /// Logs are also echoed to stdout.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
