use crate::cli::Args;
use crossterm::{execute, terminal::SetTitle};
use f1_hub::app::{self, WINDOW_TITLE};
use f1_hub::config::Config;
use f1_hub::config::validation::validate_season;
use f1_hub::data_fetcher::StandingsFetcher;
use f1_hub::error::AppError;
use std::io::stdout;

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.new_log_file_path.is_some() && args.clear_log_file_path {
        return Err(AppError::config_error(
            "Cannot use both --set-log-file and --clear-log-file simultaneously",
        ));
    }
    if args.refresh_interval == Some(0) {
        return Err(AppError::config_error(
            "Refresh interval must be at least 1 second",
        ));
    }
    if let Some(season) = &args.season {
        validate_season(season)?;
    }
    Ok(())
}

/// Season from the command line, or the configured one.
pub fn resolve_season(args: &Args, config: &Config) -> String {
    args.season.clone().unwrap_or_else(|| config.season.clone())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle(WINDOW_TITLE))?;
    Config::display().await?;
    Ok(())
}

/// Handles configuration update commands (--config, --set-log-file, --clear-log-file).
///
/// Starts from the stored config (or defaults), applies the requested
/// changes, validates and saves.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    let mut config = if std::path::Path::new(&config_path).exists() {
        Config::load_from_path(&config_path).await?
    } else {
        Config::default()
    };

    if let Some(new_base_url) = &args.new_api_base_url {
        config.api_base_url = new_base_url.trim().to_string();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Handles the --once command: fetch, print one table, exit.
pub async fn handle_once_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let fetcher = StandingsFetcher::new(config)?;
    let season = resolve_season(args, config);

    execute!(stdout(), SetTitle(WINDOW_TITLE))?;
    app::render_once(&fetcher, &mut stdout(), args.view, &season, !args.plain).await?;
    println!();

    Ok(())
}

/// Runs the refresh loop until Ctrl-C.
pub async fn handle_watch_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let fetcher = StandingsFetcher::new(config)?;
    let options = app::WatchOptions {
        view: args.view,
        season: resolve_season(args, config),
        refresh_interval: std::time::Duration::from_secs(
            args.refresh_interval
                .unwrap_or(config.refresh_interval_seconds),
        ),
        colors: !args.plain,
        debug: args.debug,
    };

    app::run_watch(&fetcher, &options).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_validate_args_accepts_defaults() {
        let args = Args::parse_from(["f1_hub"]);
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_rejects_conflicting_log_flags() {
        let args = Args::parse_from(["f1_hub", "--set-log-file", "/tmp/x.log", "--clear-log-file"]);
        assert!(matches!(validate_args(&args), Err(AppError::Config(_))));
    }

    #[test]
    fn test_validate_args_rejects_zero_interval() {
        let args = Args::parse_from(["f1_hub", "--refresh-interval", "0"]);
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_rejects_bad_season() {
        let args = Args::parse_from(["f1_hub", "--season", "2023/extra"]);
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_resolve_season() {
        let config = Config {
            season: "2022".to_string(),
            ..Config::default()
        };

        let args = Args::parse_from(["f1_hub"]);
        assert_eq!(resolve_season(&args, &config), "2022");

        let args = Args::parse_from(["f1_hub", "-s", "2019"]);
        assert_eq!(resolve_season(&args, &config), "2019");
    }
}
